//! In-memory interview progress journal.
//!
//! Holds logged interviews (newest first) and the target-company pipeline,
//! and derives the dashboard summary on demand. Identifiers are clock-derived
//! millisecond timestamps, bumped when two writes land in the same
//! millisecond so ids stay strictly increasing.

use chrono::NaiveDate;
use tracing::debug;

use exam_core::Clock;
use exam_core::model::{
    ApplicationStatus, InterviewDraft, InterviewKind, InterviewRecord, ProgressError,
    ProgressSummary, RecordId, TargetCompany, TargetId,
};

use crate::error::TrackerError;

#[derive(Debug, Clone)]
pub struct ProgressTracker {
    records: Vec<InterviewRecord>,
    targets: Vec<TargetCompany>,
    clock: Clock,
    last_id_millis: i64,
}

impl ProgressTracker {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            records: Vec::new(),
            targets: Vec::new(),
            clock,
            last_id_millis: 0,
        }
    }

    /// A tracker pre-seeded with the demo journal shown on first launch.
    ///
    /// # Panics
    ///
    /// Panics if a seed entry fails validation, which would be a defect in
    /// the entries below.
    #[must_use]
    pub fn with_sample_data(clock: Clock) -> Self {
        let mut tracker = Self::new(clock);

        // Inserted oldest-display-position first so the dashboard lists
        // TechCorp at the top.
        let seed_records = [
            ("WebWeavers", (2025, 9, 15), InterviewKind::Technical, 92, "Data structures questions were easy."),
            ("DataSys", (2025, 8, 28), InterviewKind::SystemDesign, 78, "Need to study caching strategies more."),
            ("Innovate LLC", (2025, 9, 5), InterviewKind::Behavioral, 95, "STAR method worked well."),
            ("TechCorp", (2025, 9, 10), InterviewKind::Technical, 80, "Struggled with the DP question."),
        ];
        for (company, (y, m, d), kind, score, notes) in seed_records {
            let date = NaiveDate::from_ymd_opt(y, m, d).expect("seed date should be valid");
            tracker
                .log_interview(InterviewDraft {
                    company: company.to_owned(),
                    date,
                    kind,
                    score,
                    notes: Some(notes.to_owned()),
                })
                .expect("seed record should be valid");
        }

        let seed_targets = [
            ("Google", ApplicationStatus::Applied),
            ("Amazon", ApplicationStatus::Interviewing),
            ("Netflix", ApplicationStatus::Offer),
            ("Microsoft", ApplicationStatus::Rejected),
        ];
        for (name, status) in seed_targets {
            tracker
                .add_target(name, status)
                .expect("seed target should be valid");
        }

        tracker
    }

    /// Validates and stores an interview, returning its new id.
    ///
    /// # Errors
    ///
    /// Propagates draft validation failures.
    pub fn log_interview(&mut self, draft: InterviewDraft) -> Result<RecordId, TrackerError> {
        let id = RecordId::new(self.next_id_millis());
        let record = draft.validate(id).map_err(TrackerError::Progress)?;
        debug!(company = %record.company(), kind = %record.kind(), score = record.score(), "logged interview");
        self.records.insert(0, record);
        Ok(id)
    }

    /// Adds a company to the pipeline, returning its new id.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::EmptyCompany` for a blank name.
    pub fn add_target(
        &mut self,
        name: impl Into<String>,
        status: ApplicationStatus,
    ) -> Result<TargetId, TrackerError> {
        let id = TargetId::new(self.next_id_millis());
        let target = TargetCompany::new(id, name, status).map_err(TrackerError::Progress)?;
        self.targets.push(target);
        Ok(id)
    }

    /// Moves a target company to a new pipeline stage.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::UnknownTarget` for an id that was never added.
    pub fn set_target_status(
        &mut self,
        id: TargetId,
        status: ApplicationStatus,
    ) -> Result<(), TrackerError> {
        let target = self
            .targets
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or(TrackerError::Progress(ProgressError::UnknownTarget { id }))?;
        target.set_status(status);
        Ok(())
    }

    /// All records, newest first.
    #[must_use]
    pub fn records(&self) -> &[InterviewRecord] {
        &self.records
    }

    /// Records filtered by kind, newest first. `None` returns everything.
    #[must_use]
    pub fn records_by_kind(&self, kind: Option<InterviewKind>) -> Vec<InterviewRecord> {
        self.records
            .iter()
            .filter(|r| kind.is_none_or(|k| r.kind() == k))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn targets(&self) -> &[TargetCompany] {
        &self.targets
    }

    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary::from_records(&self.records)
    }

    fn next_id_millis(&mut self) -> i64 {
        let now = self.clock.now().timestamp_millis();
        self.last_id_millis = now.max(self.last_id_millis + 1);
        self.last_id_millis
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use exam_core::model::BadgeKind;
    use exam_core::time::fixed_clock;

    fn draft(company: &str, score: u32, kind: InterviewKind) -> InterviewDraft {
        InterviewDraft {
            company: company.to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
            kind,
            score,
            notes: None,
        }
    }

    #[test]
    fn records_are_listed_newest_first() {
        let mut tracker = ProgressTracker::new(fixed_clock());
        tracker
            .log_interview(draft("First", 70, InterviewKind::Technical))
            .unwrap();
        tracker
            .log_interview(draft("Second", 90, InterviewKind::Hr))
            .unwrap();

        let companies: Vec<_> = tracker.records().iter().map(|r| r.company()).collect();
        assert_eq!(companies, ["Second", "First"]);
    }

    #[test]
    fn ids_stay_strictly_increasing_under_a_frozen_clock() {
        let mut tracker = ProgressTracker::new(fixed_clock());
        let a = tracker
            .log_interview(draft("A", 70, InterviewKind::Technical))
            .unwrap();
        let b = tracker
            .log_interview(draft("B", 70, InterviewKind::Technical))
            .unwrap();
        let t = tracker.add_target("C", ApplicationStatus::Applied).unwrap();

        assert!(b.value() > a.value());
        assert!(t.value() > b.value());
    }

    #[test]
    fn invalid_draft_is_rejected_and_nothing_is_stored() {
        let mut tracker = ProgressTracker::new(fixed_clock());
        let err = tracker
            .log_interview(draft("  ", 70, InterviewKind::Technical))
            .unwrap_err();
        assert_eq!(err, TrackerError::Progress(ProgressError::EmptyCompany));
        assert!(tracker.records().is_empty());
    }

    #[test]
    fn records_by_kind_filters() {
        let mut tracker = ProgressTracker::new(fixed_clock());
        tracker
            .log_interview(draft("A", 70, InterviewKind::Technical))
            .unwrap();
        tracker
            .log_interview(draft("B", 90, InterviewKind::Behavioral))
            .unwrap();

        let technical = tracker.records_by_kind(Some(InterviewKind::Technical));
        assert_eq!(technical.len(), 1);
        assert_eq!(technical[0].company(), "A");
        assert_eq!(tracker.records_by_kind(None).len(), 2);
        assert!(tracker.records_by_kind(Some(InterviewKind::Hr)).is_empty());
    }

    #[test]
    fn target_status_updates_and_unknown_id_errors() {
        let mut tracker = ProgressTracker::new(fixed_clock());
        let id = tracker
            .add_target("Google", ApplicationStatus::Applied)
            .unwrap();
        tracker
            .set_target_status(id, ApplicationStatus::Interviewing)
            .unwrap();
        assert_eq!(
            tracker.targets()[0].status(),
            ApplicationStatus::Interviewing
        );

        let missing = TargetId::new(1);
        let err = tracker
            .set_target_status(missing, ApplicationStatus::Offer)
            .unwrap_err();
        assert_eq!(
            err,
            TrackerError::Progress(ProgressError::UnknownTarget { id: missing })
        );
    }

    #[test]
    fn sample_data_matches_the_demo_journal() {
        let tracker = ProgressTracker::with_sample_data(fixed_clock());
        let companies: Vec<_> = tracker.records().iter().map(|r| r.company()).collect();
        assert_eq!(companies, ["TechCorp", "Innovate LLC", "DataSys", "WebWeavers"]);
        assert_eq!(tracker.targets().len(), 4);

        let summary = tracker.summary();
        assert_eq!(summary.interviews_logged(), 4);
        // (80 + 95 + 78 + 92) / 4 = 86.25 → 86
        assert_eq!(summary.average_score(), 86);
        assert!(summary.badge(BadgeKind::HighAchiever).earned);
        assert!(!summary.badge(BadgeKind::PracticePro).earned);
        assert!(!summary.badge(BadgeKind::OnARoll).earned);
    }
}
