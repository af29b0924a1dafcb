//! Server-side render smoke checks.
//!
//! Views with router links need a full `Router`, so they are exercised
//! through the desktop binary instead.

use std::sync::Arc;

use dioxus::prelude::*;

use exam_core::model::ExamSettings;
use exam_core::time::fixed_clock;
use services::{ExamService, ProgressTracker, QuestionBank};
use ui::views::{MockTestView, TipsView};
use ui::{UiApp, build_app_context};

struct HarnessApp {
    exam: Arc<ExamService>,
    bank: Arc<QuestionBank>,
    progress: ProgressTracker,
}

impl UiApp for HarnessApp {
    fn exam(&self) -> Arc<ExamService> {
        Arc::clone(&self.exam)
    }

    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn progress(&self) -> ProgressTracker {
        self.progress.clone()
    }
}

fn mock_test_root() -> Element {
    use_context_provider(|| {
        let bank = Arc::new(QuestionBank::builtin());
        let exam = ExamService::new(
            &bank,
            ExamSettings::new(2, 25, 5400).unwrap(),
            fixed_clock(),
            Some(17),
        )
        .unwrap();
        let app: Arc<dyn UiApp> = Arc::new(HarnessApp {
            exam: Arc::new(exam),
            bank,
            progress: ProgressTracker::new(fixed_clock()),
        });
        build_app_context(&app)
    });

    rsx! {
        MockTestView {}
    }
}

fn render_to_string(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn tips_page_renders_all_tips() {
    let html = render_to_string(TipsView);

    assert!(html.contains("Tips") && html.contains("Tricks"));
    assert!(html.contains("STAR method"));
    assert!(html.contains("7."));
}

#[test]
fn mock_test_page_mounts_on_the_dashboard() {
    let html = render_to_string(mock_test_root);

    assert!(html.contains("Abhyaas Mock Test 1"));
    assert!(html.contains("Abhyaas Mock Test 2"));
    assert!(html.contains("75 Questions"));
    assert!(html.contains("Start Test"));
}
