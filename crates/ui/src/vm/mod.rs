mod exam_vm;
mod progress_vm;
mod time_fmt;

pub use exam_vm::{ExamPhase, ExamVm, PaperCard};
pub use progress_vm::{InterviewForm, TargetForm, kind_from_value, status_from_value};
pub use time_fmt::{format_countdown, format_date};
