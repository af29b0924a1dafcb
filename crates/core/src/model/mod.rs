mod attempt;
mod ids;
mod paper;
mod progress;
mod question;
mod report;
mod settings;

pub use ids::{PaperId, QuestionId, RecordId, TargetId};

pub use attempt::{AttemptError, AttemptPhase, ExamAttempt, FinishReason, QuestionStatus, TickOutcome};
pub use paper::{PaperError, TestPaper};
pub use progress::{
    ApplicationStatus, Badge, BadgeKind, InterviewDraft, InterviewKind, InterviewRecord,
    KindAverage, ProgressError, ProgressSummary, TargetCompany, QUESTIONS_PER_PAPER,
};
pub use question::{Category, Question, QuestionError, OPTION_COUNT};
pub use report::{AnswerOutcome, QuestionReview, ReportError, TestReport};
pub use settings::{ExamSettings, SettingsError};
