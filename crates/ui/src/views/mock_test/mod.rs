mod dashboard;
mod interface;
mod results;

use std::time::Duration;

use dioxus::prelude::*;

use exam_core::model::TickOutcome;

use crate::context::AppContext;
use crate::vm::{ExamPhase, ExamVm};

use dashboard::TestDashboard;
use interface::TestInterface;
use results::ResultsPage;

#[component]
pub fn MockTestView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = use_signal(|| ExamVm::new(ctx.exam()));

    // The countdown task must be owned by this scope: it stays mounted for
    // the whole mock-test page, while the child that starts an attempt
    // (dashboard tile, retake button) unmounts on the phase flip and any task
    // it spawned would be cancelled with it. The memo keeps the effect quiet
    // across per-second vm writes; it only refires when the key changes.
    let countdown = use_memo(move || countdown_key(&vm.read()));
    use_effect(move || {
        if let Some(nonce) = countdown() {
            spawn(run_countdown(vm, nonce));
        }
    });

    let phase = vm.read().phase();

    rsx! {
        div { class: "page mocktest-page",
            match phase {
                ExamPhase::Dashboard => rsx! { TestDashboard { vm } },
                ExamPhase::InTest => rsx! { TestInterface { vm } },
                ExamPhase::Results => rsx! { ResultsPage { vm } },
            }
        }
    }
}

/// The attempt a countdown task should exist for: `None` outside a running
/// test, otherwise the attempt's nonce. A retake yields a new nonce, so the
/// replaced task stops itself on its next wake-up.
fn countdown_key(vm: &ExamVm) -> Option<u64> {
    (vm.phase() == ExamPhase::InTest).then(|| vm.nonce())
}

/// Counts the attempt down, one second at a time. The task carries the nonce
/// of the attempt it was spawned for and stops the moment the vm moved on, so
/// an abandoned attempt's timer can never touch a later one.
async fn run_countdown(mut vm: Signal<ExamVm>, nonce: u64) {
    loop {
        tokio::time::sleep(Duration::from_secs(1)).await;
        let mut guard = vm.write();
        if guard.nonce() != nonce {
            break;
        }
        match guard.tick() {
            TickOutcome::Running { .. } => {}
            TickOutcome::Expired | TickOutcome::Stopped => break,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use exam_core::model::{ExamSettings, PaperId};
    use exam_core::time::fixed_clock;
    use services::{ExamService, QuestionBank};

    fn build_vm() -> ExamVm {
        let service = ExamService::new(
            &QuestionBank::builtin(),
            ExamSettings::new(1, 3, 60).unwrap(),
            fixed_clock(),
            Some(5),
        )
        .unwrap();
        ExamVm::new(Arc::new(service))
    }

    #[test]
    fn countdown_key_exists_exactly_while_a_test_runs() {
        let mut vm = build_vm();
        assert_eq!(countdown_key(&vm), None);

        let nonce = vm.start(PaperId::new(1)).unwrap();
        assert_eq!(countdown_key(&vm), Some(nonce));

        // Answering and marking leave the key untouched, so the running task
        // is never replaced mid-attempt.
        vm.select_option(0, 1);
        vm.toggle_mark(2);
        assert_eq!(countdown_key(&vm), Some(nonce));

        vm.request_submit();
        vm.confirm_submit();
        assert_eq!(countdown_key(&vm), None);

        let retaken = vm.retake().unwrap();
        assert_ne!(retaken, nonce);
        assert_eq!(countdown_key(&vm), Some(retaken));

        vm.to_dashboard();
        assert_eq!(countdown_key(&vm), None);
    }
}
