use chrono::{DateTime, Utc};
use std::fmt;
use thiserror::Error;

use crate::model::paper::TestPaper;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttemptError {
    #[error("attempt is no longer in progress")]
    NotInProgress,

    #[error("question index {index} is out of range for {count} questions")]
    QuestionOutOfRange { index: usize, count: usize },

    #[error("option index {index} is out of range for {count} options")]
    OptionOutOfRange { index: usize, count: usize },
}

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

/// Lifecycle phase of an attempt. Transitions are one-directional; a retake
/// is a fresh attempt over the same paper, never a phase rollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptPhase {
    InProgress,
    Finished,
}

/// How an attempt reached `Finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Submitted,
    TimedOut,
}

/// Result of one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still running; carries the remaining seconds after the decrement.
    Running { remaining_secs: u32 },
    /// This tick consumed the last second and ended the attempt.
    Expired,
    /// The attempt was already finished; nothing changed.
    Stopped,
}

/// Palette state of a single question. `Marked` wins over `Answered` for
/// display; the three states are mutually exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionStatus {
    Unanswered,
    Answered,
    Marked,
}

//
// ─── ATTEMPT ───────────────────────────────────────────────────────────────────
//

/// Mutable state of one examinee's run at a paper.
///
/// Selections and review marks are index-addressed against the paper's
/// question order, so the paper is owned and never swapped for the lifetime
/// of the attempt.
#[derive(Clone, PartialEq)]
pub struct ExamAttempt {
    paper: TestPaper,
    selections: Vec<Option<usize>>,
    marks: Vec<bool>,
    remaining_secs: u32,
    phase: AttemptPhase,
    started_at: DateTime<Utc>,
    finished: Option<(FinishReason, DateTime<Utc>)>,
}

impl ExamAttempt {
    /// Starts a fresh attempt: every selection `None`, every mark `false`,
    /// the full exam duration on the clock.
    #[must_use]
    pub fn new(paper: TestPaper, duration_secs: u32, started_at: DateTime<Utc>) -> Self {
        let count = paper.question_count();
        Self {
            paper,
            selections: vec![None; count],
            marks: vec![false; count],
            remaining_secs: duration_secs,
            phase: AttemptPhase::InProgress,
            started_at,
            finished: None,
        }
    }

    // Accessors
    #[must_use]
    pub fn paper(&self) -> &TestPaper {
        &self.paper
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.paper.question_count()
    }

    #[must_use]
    pub fn selections(&self) -> &[Option<usize>] {
        &self.selections
    }

    #[must_use]
    pub fn selection(&self, question: usize) -> Option<usize> {
        self.selections.get(question).copied().flatten()
    }

    #[must_use]
    pub fn is_marked(&self, question: usize) -> bool {
        self.marks.get(question).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn phase(&self) -> AttemptPhase {
        self.phase
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.phase == AttemptPhase::InProgress
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.finished.map(|(reason, _)| reason)
    }

    #[must_use]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished.map(|(_, at)| at)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }

    /// Palette state for one question; out-of-range reads as `Unanswered`.
    #[must_use]
    pub fn question_status(&self, question: usize) -> QuestionStatus {
        if self.is_marked(question) {
            QuestionStatus::Marked
        } else if self.selection(question).is_some() {
            QuestionStatus::Answered
        } else {
            QuestionStatus::Unanswered
        }
    }

    // Mutations, valid only while in progress.

    /// Records the option chosen for a question, overwriting any earlier
    /// choice (last write wins).
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::NotInProgress` after submit or timeout, and an
    /// out-of-range error for a bad question or option index.
    pub fn select_option(&mut self, question: usize, option: usize) -> Result<(), AttemptError> {
        self.ensure_in_progress()?;
        let q = self.question_in_range(question)?;
        let option_count = q.options().len();
        if option >= option_count {
            return Err(AttemptError::OptionOutOfRange {
                index: option,
                count: option_count,
            });
        }
        self.selections[question] = Some(option);
        Ok(())
    }

    /// Flips the review mark for a question. Marks never affect scoring.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::NotInProgress` or `QuestionOutOfRange`.
    pub fn toggle_mark(&mut self, question: usize) -> Result<(), AttemptError> {
        self.ensure_in_progress()?;
        self.question_in_range(question)?;
        self.marks[question] = !self.marks[question];
        Ok(())
    }

    /// Counts down one second. The tick that reaches zero ends the attempt
    /// exactly once; ticks against a finished attempt are no-ops, so a late
    /// timer callback can never race a manual submit.
    pub fn tick(&mut self, now: DateTime<Utc>) -> TickOutcome {
        if self.phase != AttemptPhase::InProgress {
            return TickOutcome::Stopped;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            self.finish(FinishReason::TimedOut, now);
            return TickOutcome::Expired;
        }
        TickOutcome::Running {
            remaining_secs: self.remaining_secs,
        }
    }

    /// Ends the attempt early with whatever answers are recorded.
    ///
    /// Confirmation is a UI concern; by the time this is called the examinee
    /// has already agreed.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::NotInProgress` if the attempt already finished,
    /// which makes submit-vs-timeout first-wins by construction.
    pub fn submit(&mut self, now: DateTime<Utc>) -> Result<(), AttemptError> {
        self.ensure_in_progress()?;
        self.finish(FinishReason::Submitted, now);
        Ok(())
    }

    fn finish(&mut self, reason: FinishReason, at: DateTime<Utc>) {
        self.phase = AttemptPhase::Finished;
        self.finished = Some((reason, at));
    }

    fn ensure_in_progress(&self) -> Result<(), AttemptError> {
        if self.phase == AttemptPhase::InProgress {
            Ok(())
        } else {
            Err(AttemptError::NotInProgress)
        }
    }

    fn question_in_range(&self, question: usize) -> Result<&crate::model::Question, AttemptError> {
        self.paper
            .question(question)
            .ok_or(AttemptError::QuestionOutOfRange {
                index: question,
                count: self.paper.question_count(),
            })
    }
}

impl fmt::Debug for ExamAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExamAttempt")
            .field("paper_id", &self.paper.id())
            .field("question_count", &self.paper.question_count())
            .field("answered", &self.answered_count())
            .field("remaining_secs", &self.remaining_secs)
            .field("phase", &self.phase)
            .field("finished", &self.finished)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, PaperId, Question, QuestionId, TestPaper};
    use crate::time::fixed_now;

    fn build_paper(count: u64) -> TestPaper {
        let questions = (1..=count)
            .map(|id| {
                Question::new(
                    QuestionId::new(id),
                    Category::Aptitude,
                    format!("Prompt {id}"),
                    vec!["a".into(), "b".into(), "c".into(), "d".into()],
                    0,
                )
                .unwrap()
            })
            .collect();
        TestPaper::new(PaperId::new(1), "Test", questions).unwrap()
    }

    fn build_attempt(questions: u64, duration_secs: u32) -> ExamAttempt {
        ExamAttempt::new(build_paper(questions), duration_secs, fixed_now())
    }

    #[test]
    fn fresh_attempt_starts_blank() {
        let attempt = build_attempt(3, 5400);
        assert!(attempt.is_in_progress());
        assert_eq!(attempt.remaining_secs(), 5400);
        assert!(attempt.selections().iter().all(Option::is_none));
        assert_eq!(attempt.answered_count(), 0);
        for i in 0..3 {
            assert!(!attempt.is_marked(i));
            assert_eq!(attempt.question_status(i), QuestionStatus::Unanswered);
        }
    }

    #[test]
    fn select_option_last_write_wins() {
        let mut attempt = build_attempt(3, 5400);
        attempt.select_option(1, 2).unwrap();
        attempt.select_option(1, 0).unwrap();
        assert_eq!(attempt.selection(1), Some(0));
        assert_eq!(attempt.answered_count(), 1);
    }

    #[test]
    fn select_option_validates_indices() {
        let mut attempt = build_attempt(2, 5400);
        assert_eq!(
            attempt.select_option(5, 0).unwrap_err(),
            AttemptError::QuestionOutOfRange { index: 5, count: 2 }
        );
        assert_eq!(
            attempt.select_option(0, 9).unwrap_err(),
            AttemptError::OptionOutOfRange { index: 9, count: 4 }
        );
    }

    #[test]
    fn toggle_mark_flips_without_touching_answers() {
        let mut attempt = build_attempt(2, 5400);
        attempt.select_option(0, 1).unwrap();
        attempt.toggle_mark(0).unwrap();
        assert!(attempt.is_marked(0));
        assert_eq!(attempt.selection(0), Some(1));
        // Marked takes display precedence over answered.
        assert_eq!(attempt.question_status(0), QuestionStatus::Marked);

        attempt.toggle_mark(0).unwrap();
        assert!(!attempt.is_marked(0));
        assert_eq!(attempt.question_status(0), QuestionStatus::Answered);
    }

    #[test]
    fn tick_counts_down_and_expires_once() {
        let mut attempt = build_attempt(1, 2);
        assert_eq!(
            attempt.tick(fixed_now()),
            TickOutcome::Running { remaining_secs: 1 }
        );
        assert_eq!(attempt.tick(fixed_now()), TickOutcome::Expired);
        assert_eq!(attempt.phase(), AttemptPhase::Finished);
        assert_eq!(attempt.finish_reason(), Some(FinishReason::TimedOut));

        // A straggling timer callback is a no-op.
        assert_eq!(attempt.tick(fixed_now()), TickOutcome::Stopped);
        assert_eq!(attempt.remaining_secs(), 0);
    }

    #[test]
    fn submit_ends_attempt_and_freezes_answers() {
        let mut attempt = build_attempt(2, 5400);
        attempt.select_option(0, 3).unwrap();
        attempt.submit(fixed_now()).unwrap();

        assert_eq!(attempt.finish_reason(), Some(FinishReason::Submitted));
        assert_eq!(attempt.finished_at(), Some(fixed_now()));
        assert_eq!(
            attempt.select_option(1, 0).unwrap_err(),
            AttemptError::NotInProgress
        );
        assert_eq!(attempt.toggle_mark(0).unwrap_err(), AttemptError::NotInProgress);
        assert_eq!(attempt.selection(0), Some(3));
    }

    #[test]
    fn submit_after_timeout_is_rejected() {
        let mut attempt = build_attempt(1, 1);
        assert_eq!(attempt.tick(fixed_now()), TickOutcome::Expired);
        assert_eq!(attempt.submit(fixed_now()).unwrap_err(), AttemptError::NotInProgress);
        // Timeout won; the reason does not flip.
        assert_eq!(attempt.finish_reason(), Some(FinishReason::TimedOut));
    }

    #[test]
    fn retake_is_a_fresh_attempt_over_the_same_paper() {
        let mut attempt = build_attempt(3, 10);
        attempt.select_option(0, 1).unwrap();
        attempt.toggle_mark(2).unwrap();
        attempt.tick(fixed_now());
        attempt.submit(fixed_now()).unwrap();

        let retake = ExamAttempt::new(attempt.paper().clone(), 10, fixed_now());
        assert!(retake.is_in_progress());
        assert_eq!(retake.remaining_secs(), 10);
        assert!(retake.selections().iter().all(Option::is_none));
        assert!(!retake.is_marked(2));
        assert_eq!(retake.paper(), attempt.paper());
    }
}
