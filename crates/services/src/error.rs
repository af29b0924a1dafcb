//! Shared error types for the services crate.

use thiserror::Error;

use exam_core::model::{Category, PaperError, ProgressError, ReportError, SettingsError};

/// Errors emitted by `PaperGenerator`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GeneratorError {
    #[error("{category} pool has {available} questions, {requested} requested per paper")]
    PoolTooSmall {
        category: Category,
        requested: usize,
        available: usize,
    },
    #[error(transparent)]
    Paper(#[from] PaperError),
}

/// Errors emitted by `ExamService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExamServiceError {
    #[error("no paper with id {id}")]
    UnknownPaper { id: u64 },
    #[error("attempt is still in progress; nothing to score")]
    AttemptInProgress,
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Errors emitted by `ProgressTracker`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TrackerError {
    #[error(transparent)]
    Progress(#[from] ProgressError),
}
