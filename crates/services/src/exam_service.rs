//! Exam orchestration: a generated paper series plus attempt lifecycle.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use exam_core::Clock;
use exam_core::model::{ExamAttempt, ExamSettings, PaperId, TestPaper, TestReport};

use crate::error::ExamServiceError;
use crate::paper_generator::PaperGenerator;
use crate::question_bank::QuestionBank;

/// The mock-test series and the operations on it.
///
/// The series is generated once at construction and is immutable afterwards,
/// so every dashboard visit and every retake sees the same papers.
#[derive(Debug, Clone)]
pub struct ExamService {
    settings: ExamSettings,
    papers: Vec<TestPaper>,
    clock: Clock,
}

impl ExamService {
    /// Builds the service, generating the full paper series up front.
    ///
    /// A `seed` pins the series for reproducible runs; `None` draws from the
    /// thread rng.
    ///
    /// # Errors
    ///
    /// Fails when a question pool cannot cover the configured per-category
    /// sample size.
    pub fn new(
        bank: &QuestionBank,
        settings: ExamSettings,
        clock: Clock,
        seed: Option<u64>,
    ) -> Result<Self, ExamServiceError> {
        let generator = PaperGenerator::new(bank, &settings);
        let papers = match seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                generator.generate_series(&mut rng)?
            }
            None => generator.generate_series(&mut rand::rng())?,
        };

        info!(
            papers = papers.len(),
            questions_per_paper = papers.first().map_or(0, TestPaper::question_count),
            duration_mins = settings.duration_mins(),
            seeded = seed.is_some(),
            "generated test series"
        );

        Ok(Self {
            settings,
            papers,
            clock,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &ExamSettings {
        &self.settings
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn papers(&self) -> &[TestPaper] {
        &self.papers
    }

    /// Looks up one paper of the series.
    ///
    /// # Errors
    ///
    /// Returns `ExamServiceError::UnknownPaper` for an id outside the series.
    pub fn paper(&self, id: PaperId) -> Result<&TestPaper, ExamServiceError> {
        self.papers
            .iter()
            .find(|p| p.id() == id)
            .ok_or(ExamServiceError::UnknownPaper { id: id.value() })
    }

    /// Starts a fresh attempt at a paper with the full duration on the clock.
    ///
    /// # Errors
    ///
    /// Returns `ExamServiceError::UnknownPaper` for an id outside the series.
    pub fn start_attempt(&self, id: PaperId) -> Result<ExamAttempt, ExamServiceError> {
        let paper = self.paper(id)?.clone();
        debug!(paper = %paper.name(), "starting attempt");
        Ok(ExamAttempt::new(
            paper,
            self.settings.duration_secs(),
            self.clock.now(),
        ))
    }

    /// Starts a fresh attempt over the same paper as a previous one. Nothing
    /// from the old attempt carries over.
    #[must_use]
    pub fn retake(&self, previous: &ExamAttempt) -> ExamAttempt {
        debug!(paper = %previous.paper().name(), "retaking paper");
        ExamAttempt::new(
            previous.paper().clone(),
            self.settings.duration_secs(),
            self.clock.now(),
        )
    }

    /// Scores a finished attempt.
    ///
    /// # Errors
    ///
    /// Returns `ExamServiceError::AttemptInProgress` if the attempt has not
    /// been submitted or timed out yet.
    pub fn score(&self, attempt: &ExamAttempt) -> Result<TestReport, ExamServiceError> {
        if attempt.is_in_progress() {
            return Err(ExamServiceError::AttemptInProgress);
        }
        let report = TestReport::from_answers(attempt.paper(), attempt.selections())?;
        info!(
            paper = %attempt.paper().name(),
            correct = report.correct(),
            incorrect = report.incorrect(),
            unanswered = report.unanswered(),
            "scored attempt"
        );
        Ok(report)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::time::fixed_clock;

    fn build_service() -> ExamService {
        ExamService::new(
            &QuestionBank::builtin(),
            ExamSettings::new(3, 5, 300).unwrap(),
            fixed_clock(),
            Some(11),
        )
        .unwrap()
    }

    #[test]
    fn series_is_generated_once_at_construction() {
        let service = build_service();
        assert_eq!(service.papers().len(), 3);
        assert_eq!(service.papers()[0].question_count(), 15);
        assert_eq!(
            service.paper(PaperId::new(2)).unwrap().name(),
            "Abhyaas Mock Test 2"
        );
    }

    #[test]
    fn unknown_paper_is_reported() {
        let service = build_service();
        let err = service.paper(PaperId::new(99)).unwrap_err();
        assert!(matches!(err, ExamServiceError::UnknownPaper { id: 99 }));
        assert!(service.start_attempt(PaperId::new(99)).is_err());
    }

    #[test]
    fn oversized_sample_fails_construction() {
        let err = ExamService::new(
            &QuestionBank::builtin(),
            ExamSettings::new(1, 31, 300).unwrap(),
            fixed_clock(),
            Some(0),
        )
        .unwrap_err();
        assert!(matches!(err, ExamServiceError::Generator(_)));
    }

    #[test]
    fn start_attempt_uses_configured_duration() {
        let service = build_service();
        let attempt = service.start_attempt(PaperId::new(1)).unwrap();
        assert_eq!(attempt.remaining_secs(), 300);
        assert_eq!(attempt.question_count(), 15);
    }

    #[test]
    fn retake_resets_state_but_keeps_the_paper() {
        let service = build_service();
        let mut attempt = service.start_attempt(PaperId::new(1)).unwrap();
        attempt.select_option(0, 2).unwrap();
        attempt.submit(service.clock.now()).unwrap();

        let retake = service.retake(&attempt);
        assert!(retake.is_in_progress());
        assert_eq!(retake.answered_count(), 0);
        assert_eq!(retake.paper(), attempt.paper());
    }

    #[test]
    fn scoring_requires_a_finished_attempt() {
        let service = build_service();
        let mut attempt = service.start_attempt(PaperId::new(1)).unwrap();
        assert!(matches!(
            service.score(&attempt).unwrap_err(),
            ExamServiceError::AttemptInProgress
        ));

        attempt.select_option(0, 0).unwrap();
        attempt.submit(service.clock.now()).unwrap();
        let report = service.score(&attempt).unwrap();
        assert_eq!(report.total(), 15);
        assert_eq!(
            report.correct() + report.incorrect() + report.unanswered(),
            15
        );
    }
}
