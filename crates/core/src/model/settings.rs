use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("paper count must be > 0")]
    InvalidPaperCount,

    #[error("questions per category must be > 0")]
    InvalidQuestionsPerCategory,

    #[error("exam duration must be between 60 and 21600 seconds")]
    InvalidDuration,
}

/// Configuration for the generated test series.
///
/// Controls how many papers are generated, how large the per-category sample
/// is, and how long one attempt runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamSettings {
    paper_count: u32,
    questions_per_category: u32,
    duration_secs: u32,
}

impl ExamSettings {
    /// The shipped series: 30 papers, 25 questions from each of the three
    /// pools (75 per paper), 90 minutes per attempt.
    #[must_use]
    pub fn default_series() -> Self {
        Self {
            paper_count: 30,
            questions_per_category: 25,
            duration_secs: 90 * 60,
        }
    }

    /// Creates custom settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` when a count is zero or the duration falls
    /// outside one minute to six hours.
    pub fn new(
        paper_count: u32,
        questions_per_category: u32,
        duration_secs: u32,
    ) -> Result<Self, SettingsError> {
        if paper_count == 0 {
            return Err(SettingsError::InvalidPaperCount);
        }
        if questions_per_category == 0 {
            return Err(SettingsError::InvalidQuestionsPerCategory);
        }
        if !(60..=21_600).contains(&duration_secs) {
            return Err(SettingsError::InvalidDuration);
        }

        Ok(Self {
            paper_count,
            questions_per_category,
            duration_secs,
        })
    }

    // Accessors
    #[must_use]
    pub fn paper_count(&self) -> u32 {
        self.paper_count
    }

    #[must_use]
    pub fn questions_per_category(&self) -> u32 {
        self.questions_per_category
    }

    #[must_use]
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    #[must_use]
    pub fn duration_mins(&self) -> u32 {
        self.duration_secs / 60
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
