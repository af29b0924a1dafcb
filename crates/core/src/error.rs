use thiserror::Error;

use crate::model::{AttemptError, PaperError, ProgressError, QuestionError, ReportError, SettingsError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Paper(#[from] PaperError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Attempt(#[from] AttemptError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error(transparent)]
    Progress(#[from] ProgressError),
}
