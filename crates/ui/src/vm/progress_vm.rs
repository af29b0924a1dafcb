use chrono::NaiveDate;

use exam_core::model::{ApplicationStatus, InterviewDraft, InterviewKind};

/// Form state for the log-interview modal. Fields stay raw strings until
/// submit so the user sees exactly what they typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterviewForm {
    pub company: String,
    pub date: String,
    pub kind: InterviewKind,
    pub score: String,
    pub notes: String,
}

impl InterviewForm {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            company: String::new(),
            date: today.format("%Y-%m-%d").to_string(),
            kind: InterviewKind::Technical,
            score: String::new(),
            notes: String::new(),
        }
    }

    /// Parses the form into a draft the tracker can validate.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message for the first invalid field.
    pub fn to_draft(&self) -> Result<InterviewDraft, String> {
        if self.company.trim().is_empty() {
            return Err("Enter a company name.".to_owned());
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| "Enter the date as YYYY-MM-DD.".to_owned())?;
        let score: u32 = self
            .score
            .trim()
            .parse()
            .ok()
            .filter(|s| *s <= 100)
            .ok_or_else(|| "Score must be a whole number from 0 to 100.".to_owned())?;

        Ok(InterviewDraft {
            company: self.company.clone(),
            date,
            kind: self.kind,
            score,
            notes: (!self.notes.trim().is_empty()).then(|| self.notes.clone()),
        })
    }
}

/// Form state for the add-target modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetForm {
    pub name: String,
    pub status: ApplicationStatus,
}

impl TargetForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: String::new(),
            status: ApplicationStatus::Applied,
        }
    }

    /// # Errors
    ///
    /// Returns a user-facing message for a blank name.
    pub fn validated_name(&self) -> Result<String, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Enter a company name.".to_owned());
        }
        Ok(name.to_owned())
    }
}

impl Default for TargetForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a `<select>` value back to a kind. Values are the display labels.
#[must_use]
pub fn kind_from_value(value: &str) -> Option<InterviewKind> {
    InterviewKind::ALL.into_iter().find(|k| k.label() == value)
}

/// Maps a `<select>` value back to a status. Values are the display labels.
#[must_use]
pub fn status_from_value(value: &str) -> Option<ApplicationStatus> {
    ApplicationStatus::ALL
        .into_iter()
        .find(|s| s.label() == value)
}
