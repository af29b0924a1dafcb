#![forbid(unsafe_code)]

pub mod error;
pub mod exam_service;
pub mod paper_generator;
pub mod progress_tracker;
pub mod question_bank;

pub use exam_core::Clock;

pub use error::{ExamServiceError, GeneratorError, TrackerError};
pub use exam_service::ExamService;
pub use paper_generator::PaperGenerator;
pub use progress_tracker::ProgressTracker;
pub use question_bank::QuestionBank;
