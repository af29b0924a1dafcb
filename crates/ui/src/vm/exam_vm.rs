use std::sync::Arc;

use exam_core::model::{
    AttemptError, ExamAttempt, PaperId, QuestionStatus, TestReport, TickOutcome,
};
use services::{ExamService, ExamServiceError};

/// Which of the three mock-test screens is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExamPhase {
    Dashboard,
    InTest,
    Results,
}

/// One dashboard tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaperCard {
    pub id: PaperId,
    pub name: String,
    pub question_count: usize,
    pub duration_mins: u32,
}

/// State behind the mock-test page.
///
/// Holds at most one attempt at a time. Every new attempt bumps `nonce`, and
/// the countdown task spawned for it carries that nonce, so a timer left over
/// from an abandoned attempt can never tick a later one.
pub struct ExamVm {
    service: Arc<ExamService>,
    attempt: Option<ExamAttempt>,
    report: Option<TestReport>,
    active_question: usize,
    confirming_submit: bool,
    nonce: u64,
}

impl ExamVm {
    #[must_use]
    pub fn new(service: Arc<ExamService>) -> Self {
        Self {
            service,
            attempt: None,
            report: None,
            active_question: 0,
            confirming_submit: false,
            nonce: 0,
        }
    }

    #[must_use]
    pub fn phase(&self) -> ExamPhase {
        if self.report.is_some() {
            ExamPhase::Results
        } else if self.attempt.is_some() {
            ExamPhase::InTest
        } else {
            ExamPhase::Dashboard
        }
    }

    #[must_use]
    pub fn paper_cards(&self) -> Vec<PaperCard> {
        let duration_mins = self.service.settings().duration_mins();
        self.service
            .papers()
            .iter()
            .map(|paper| PaperCard {
                id: paper.id(),
                name: paper.name().to_owned(),
                question_count: paper.question_count(),
                duration_mins,
            })
            .collect()
    }

    #[must_use]
    pub fn attempt(&self) -> Option<&ExamAttempt> {
        self.attempt.as_ref()
    }

    #[must_use]
    pub fn report(&self) -> Option<&TestReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub fn active_question(&self) -> usize {
        self.active_question
    }

    #[must_use]
    pub fn confirming_submit(&self) -> bool {
        self.confirming_submit
    }

    #[must_use]
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.attempt.as_ref().map_or(0, ExamAttempt::remaining_secs)
    }

    /// Starts a fresh attempt and returns the nonce the countdown task must
    /// carry.
    ///
    /// # Errors
    ///
    /// Returns `ExamServiceError::UnknownPaper` for a bad id.
    pub fn start(&mut self, paper_id: PaperId) -> Result<u64, ExamServiceError> {
        let attempt = self.service.start_attempt(paper_id)?;
        Ok(self.install(attempt))
    }

    /// Starts over on the paper just finished. No-op on the dashboard.
    pub fn retake(&mut self) -> Option<u64> {
        let attempt = self.attempt.as_ref()?;
        let fresh = self.service.retake(attempt);
        Some(self.install(fresh))
    }

    pub fn to_dashboard(&mut self) {
        self.attempt = None;
        self.report = None;
        self.confirming_submit = false;
        self.nonce += 1;
    }

    pub fn select_option(&mut self, question: usize, option: usize) {
        if let Some(attempt) = self.attempt.as_mut() {
            // A click landing after the attempt finished is stale; drop it.
            let _ = attempt.select_option(question, option);
        }
    }

    pub fn toggle_mark(&mut self, question: usize) {
        if let Some(attempt) = self.attempt.as_mut() {
            let _ = attempt.toggle_mark(question);
        }
    }

    pub fn set_active_question(&mut self, question: usize) {
        self.active_question = question;
    }

    #[must_use]
    pub fn question_status(&self, question: usize) -> QuestionStatus {
        self.attempt
            .as_ref()
            .map_or(QuestionStatus::Unanswered, |a| a.question_status(question))
    }

    /// One countdown second. On expiry the attempt is scored and the page
    /// flips to results.
    pub fn tick(&mut self) -> TickOutcome {
        let now = self.service.clock().now();
        let Some(attempt) = self.attempt.as_mut() else {
            return TickOutcome::Stopped;
        };
        let outcome = attempt.tick(now);
        if outcome == TickOutcome::Expired {
            self.finalize();
        }
        outcome
    }

    pub fn request_submit(&mut self) {
        if self.attempt.as_ref().is_some_and(ExamAttempt::is_in_progress) {
            self.confirming_submit = true;
        }
    }

    pub fn cancel_submit(&mut self) {
        self.confirming_submit = false;
    }

    /// The user confirmed the dialog: end the attempt and score it. If the
    /// timer expired while the dialog was open, the timeout already ended the
    /// attempt and this only scores it.
    pub fn confirm_submit(&mut self) {
        self.confirming_submit = false;
        let now = self.service.clock().now();
        if let Some(attempt) = self.attempt.as_mut() {
            match attempt.submit(now) {
                Ok(()) | Err(AttemptError::NotInProgress) => self.finalize(),
                Err(_) => {}
            }
        }
    }

    fn install(&mut self, attempt: ExamAttempt) -> u64 {
        self.attempt = Some(attempt);
        self.report = None;
        self.active_question = 0;
        self.confirming_submit = false;
        self.nonce += 1;
        self.nonce
    }

    fn finalize(&mut self) {
        if self.report.is_some() {
            return;
        }
        if let Some(attempt) = self.attempt.as_ref() {
            // A finished attempt always scores; a mismatch here would be a
            // construction bug, so surface nothing and stay on the test page.
            if let Ok(report) = self.service.score(attempt) {
                self.report = Some(report);
            }
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
