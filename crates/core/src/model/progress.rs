use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

use crate::model::ids::{RecordId, TargetId};

/// Each logged interview counts as one full practice paper of questions.
pub const QUESTIONS_PER_PAPER: usize = 75;

//
// ─── ENUMS ─────────────────────────────────────────────────────────────────────
//

/// Round type of a logged interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum InterviewKind {
    Technical,
    Behavioral,
    SystemDesign,
    Hr,
}

impl InterviewKind {
    pub const ALL: [InterviewKind; 4] = [
        InterviewKind::Technical,
        InterviewKind::Behavioral,
        InterviewKind::SystemDesign,
        InterviewKind::Hr,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            InterviewKind::Technical => "Technical",
            InterviewKind::Behavioral => "Behavioral",
            InterviewKind::SystemDesign => "System Design",
            InterviewKind::Hr => "HR",
        }
    }
}

impl fmt::Display for InterviewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Pipeline stage for a target company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ApplicationStatus {
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Applied,
        ApplicationStatus::Interviewing,
        ApplicationStatus::Offer,
        ApplicationStatus::Rejected,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Interviewing => "Interviewing",
            ApplicationStatus::Offer => "Offer",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── RECORDS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("company name cannot be empty")]
    EmptyCompany,

    #[error("score {score} is out of the 0..=100 range")]
    ScoreOutOfRange { score: u32 },

    #[error("no target company with id {id}")]
    UnknownTarget { id: TargetId },
}

/// Unvalidated form input for logging an interview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewDraft {
    pub company: String,
    pub date: NaiveDate,
    pub kind: InterviewKind,
    pub score: u32,
    pub notes: Option<String>,
}

impl InterviewDraft {
    /// Validates the draft and stamps it with an identifier.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::EmptyCompany` for a blank company name and
    /// `ProgressError::ScoreOutOfRange` for a score above 100.
    pub fn validate(self, id: RecordId) -> Result<InterviewRecord, ProgressError> {
        let company = self.company.trim().to_owned();
        if company.is_empty() {
            return Err(ProgressError::EmptyCompany);
        }
        if self.score > 100 {
            return Err(ProgressError::ScoreOutOfRange { score: self.score });
        }
        let notes = self
            .notes
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty());

        Ok(InterviewRecord {
            id,
            company,
            date: self.date,
            kind: self.kind,
            score: self.score,
            notes,
        })
    }
}

/// A self-reported interview outcome. Immutable once logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewRecord {
    id: RecordId,
    company: String,
    date: NaiveDate,
    kind: InterviewKind,
    score: u32,
    notes: Option<String>,
}

impl InterviewRecord {
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn kind(&self) -> InterviewKind {
        self.kind
    }

    /// Self-assessed score as a percentage.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

/// A company the examinee is pursuing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCompany {
    id: TargetId,
    name: String,
    status: ApplicationStatus,
}

impl TargetCompany {
    /// # Errors
    ///
    /// Returns `ProgressError::EmptyCompany` for a blank name.
    pub fn new(
        id: TargetId,
        name: impl Into<String>,
        status: ApplicationStatus,
    ) -> Result<Self, ProgressError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProgressError::EmptyCompany);
        }
        Ok(Self {
            id,
            name: name.trim().to_owned(),
            status,
        })
    }

    #[must_use]
    pub fn id(&self) -> TargetId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    pub fn set_status(&mut self, status: ApplicationStatus) {
        self.status = status;
    }
}

//
// ─── SUMMARY & BADGES ──────────────────────────────────────────────────────────
//

/// Achievement rules evaluated over the logged records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    GettingStarted,
    PracticePro,
    HighAchiever,
    OnARoll,
}

impl BadgeKind {
    pub const ALL: [BadgeKind; 4] = [
        BadgeKind::GettingStarted,
        BadgeKind::PracticePro,
        BadgeKind::HighAchiever,
        BadgeKind::OnARoll,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            BadgeKind::GettingStarted => "Getting Started",
            BadgeKind::PracticePro => "Practice Pro",
            BadgeKind::HighAchiever => "High Achiever",
            BadgeKind::OnARoll => "On a Roll",
        }
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            BadgeKind::GettingStarted => "Log your first interview.",
            BadgeKind::PracticePro => "Complete 5 interviews.",
            BadgeKind::HighAchiever => "Achieve an average score of 85% or more.",
            BadgeKind::OnARoll => "Score 80% or more in 3 consecutive interviews.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub kind: BadgeKind,
    pub earned: bool,
}

/// Average score of one interview kind; `average` is `None` when no record of
/// that kind exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindAverage {
    pub kind: InterviewKind,
    pub average: Option<u32>,
}

/// Derived statistics over the logged records. Pure aggregation; the
/// dashboard renders this without recomputing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSummary {
    interviews_logged: usize,
    questions_practiced: usize,
    average_score: u32,
    kind_averages: [KindAverage; 4],
    badges: [Badge; 4],
}

impl ProgressSummary {
    /// Aggregates records ordered newest first (the tracker's ordering).
    #[must_use]
    pub fn from_records(records: &[InterviewRecord]) -> Self {
        let interviews_logged = records.len();
        let questions_practiced = interviews_logged * QUESTIONS_PER_PAPER;
        let average_score = rounded_average(records.iter().map(InterviewRecord::score));

        let kind_averages = InterviewKind::ALL.map(|kind| {
            let scores: Vec<u32> = records
                .iter()
                .filter(|r| r.kind() == kind)
                .map(InterviewRecord::score)
                .collect();
            KindAverage {
                kind,
                average: if scores.is_empty() {
                    None
                } else {
                    Some(rounded_average(scores.into_iter()))
                },
            }
        });

        let on_a_roll =
            interviews_logged >= 3 && records.iter().take(3).all(|r| r.score() >= 80);
        let badges = BadgeKind::ALL.map(|kind| Badge {
            kind,
            earned: match kind {
                BadgeKind::GettingStarted => interviews_logged >= 1,
                BadgeKind::PracticePro => interviews_logged >= 5,
                BadgeKind::HighAchiever => average_score >= 85,
                BadgeKind::OnARoll => on_a_roll,
            },
        });

        Self {
            interviews_logged,
            questions_practiced,
            average_score,
            kind_averages,
            badges,
        }
    }

    // Accessors
    #[must_use]
    pub fn interviews_logged(&self) -> usize {
        self.interviews_logged
    }

    #[must_use]
    pub fn questions_practiced(&self) -> usize {
        self.questions_practiced
    }

    /// Rounded mean over all records; zero when nothing is logged.
    #[must_use]
    pub fn average_score(&self) -> u32 {
        self.average_score
    }

    #[must_use]
    pub fn kind_averages(&self) -> &[KindAverage; 4] {
        &self.kind_averages
    }

    #[must_use]
    pub fn badges(&self) -> &[Badge; 4] {
        &self.badges
    }

    #[must_use]
    pub fn badge(&self, kind: BadgeKind) -> Badge {
        self.badges
            .iter()
            .copied()
            .find(|b| b.kind == kind)
            .unwrap_or(Badge { kind, earned: false })
    }
}

fn rounded_average(scores: impl Iterator<Item = u32>) -> u32 {
    let (sum, count) = scores.fold((0u64, 0u64), |(sum, count), s| (sum + u64::from(s), count + 1));
    if count == 0 {
        return 0;
    }
    // Round half up, matching the dashboard's display convention.
    u32::try_from((sum + count / 2) / count).unwrap_or(u32::MAX)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, kind: InterviewKind, score: u32) -> InterviewRecord {
        InterviewDraft {
            company: format!("Company {id}"),
            date: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
            kind,
            score,
            notes: None,
        }
        .validate(RecordId::new(id))
        .unwrap()
    }

    #[test]
    fn draft_rejects_blank_company() {
        let err = InterviewDraft {
            company: "   ".into(),
            date: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
            kind: InterviewKind::Technical,
            score: 80,
            notes: None,
        }
        .validate(RecordId::new(1))
        .unwrap_err();
        assert_eq!(err, ProgressError::EmptyCompany);
    }

    #[test]
    fn draft_rejects_score_above_hundred() {
        let err = InterviewDraft {
            company: "TechCorp".into(),
            date: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
            kind: InterviewKind::Technical,
            score: 101,
            notes: None,
        }
        .validate(RecordId::new(1))
        .unwrap_err();
        assert_eq!(err, ProgressError::ScoreOutOfRange { score: 101 });
    }

    #[test]
    fn draft_trims_company_and_drops_blank_notes() {
        let record = InterviewDraft {
            company: "  TechCorp  ".into(),
            date: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
            kind: InterviewKind::Behavioral,
            score: 95,
            notes: Some("   ".into()),
        }
        .validate(RecordId::new(1))
        .unwrap();
        assert_eq!(record.company(), "TechCorp");
        assert_eq!(record.notes(), None);
    }

    #[test]
    fn summary_of_no_records_is_zeroed() {
        let summary = ProgressSummary::from_records(&[]);
        assert_eq!(summary.interviews_logged(), 0);
        assert_eq!(summary.questions_practiced(), 0);
        assert_eq!(summary.average_score(), 0);
        assert!(summary.badges().iter().all(|b| !b.earned));
        assert!(summary.kind_averages().iter().all(|k| k.average.is_none()));
    }

    #[test]
    fn summary_averages_round_to_nearest() {
        let records = vec![
            record(3, InterviewKind::Technical, 80),
            record(2, InterviewKind::Behavioral, 95),
            record(1, InterviewKind::SystemDesign, 78),
        ];
        let summary = ProgressSummary::from_records(&records);
        // (80 + 95 + 78) / 3 = 84.33 → 84
        assert_eq!(summary.average_score(), 84);
        assert_eq!(
            summary.questions_practiced(),
            3 * QUESTIONS_PER_PAPER
        );
    }

    #[test]
    fn kind_average_only_counts_matching_records() {
        let records = vec![
            record(4, InterviewKind::Technical, 92),
            record(3, InterviewKind::Technical, 80),
            record(2, InterviewKind::Behavioral, 95),
        ];
        let summary = ProgressSummary::from_records(&records);
        let technical = summary
            .kind_averages()
            .iter()
            .find(|k| k.kind == InterviewKind::Technical)
            .unwrap();
        assert_eq!(technical.average, Some(86));
        let hr = summary
            .kind_averages()
            .iter()
            .find(|k| k.kind == InterviewKind::Hr)
            .unwrap();
        assert_eq!(hr.average, None);
    }

    #[test]
    fn badge_thresholds() {
        let one = vec![record(1, InterviewKind::Technical, 90)];
        let summary = ProgressSummary::from_records(&one);
        assert!(summary.badge(BadgeKind::GettingStarted).earned);
        assert!(!summary.badge(BadgeKind::PracticePro).earned);
        assert!(summary.badge(BadgeKind::HighAchiever).earned);
        assert!(!summary.badge(BadgeKind::OnARoll).earned);

        let five: Vec<_> = (1..=5)
            .map(|id| record(id, InterviewKind::Technical, 85))
            .collect();
        let summary = ProgressSummary::from_records(&five);
        assert!(summary.badge(BadgeKind::PracticePro).earned);
        assert!(summary.badge(BadgeKind::OnARoll).earned);
    }

    #[test]
    fn on_a_roll_looks_at_the_three_most_recent() {
        // Newest first: 85, 90, 79 → streak broken inside the window.
        let records = vec![
            record(4, InterviewKind::Technical, 85),
            record(3, InterviewKind::Technical, 90),
            record(2, InterviewKind::Technical, 79),
            record(1, InterviewKind::Technical, 99),
        ];
        let summary = ProgressSummary::from_records(&records);
        assert!(!summary.badge(BadgeKind::OnARoll).earned);
    }

    #[test]
    fn target_company_tracks_status() {
        let mut target =
            TargetCompany::new(TargetId::new(1), " Google ", ApplicationStatus::Applied).unwrap();
        assert_eq!(target.name(), "Google");
        target.set_status(ApplicationStatus::Interviewing);
        assert_eq!(target.status(), ApplicationStatus::Interviewing);

        let err = TargetCompany::new(TargetId::new(2), " ", ApplicationStatus::Applied).unwrap_err();
        assert_eq!(err, ProgressError::EmptyCompany);
    }
}
