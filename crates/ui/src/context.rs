use std::sync::Arc;

use services::{ExamService, ProgressTracker, QuestionBank};

/// What the composition root must hand the UI.
pub trait UiApp: Send + Sync {
    fn exam(&self) -> Arc<ExamService>;
    fn question_bank(&self) -> Arc<QuestionBank>;
    fn progress(&self) -> ProgressTracker;
}

#[derive(Clone)]
pub struct AppContext {
    exam: Arc<ExamService>,
    question_bank: Arc<QuestionBank>,
    progress: ProgressTracker,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            exam: app.exam(),
            question_bank: app.question_bank(),
            progress: app.progress(),
        }
    }

    #[must_use]
    pub fn exam(&self) -> Arc<ExamService> {
        Arc::clone(&self.exam)
    }

    #[must_use]
    pub fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.question_bank)
    }

    /// The initial journal state. `App` wraps it in a signal at the root.
    #[must_use]
    pub fn progress(&self) -> ProgressTracker {
        self.progress.clone()
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
