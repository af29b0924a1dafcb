use dioxus::prelude::*;

use crate::vm::{ExamVm, PaperCard};

#[component]
pub(super) fn TestDashboard(vm: Signal<ExamVm>) -> Element {
    let cards = vm.read().paper_cards();

    rsx! {
        header { class: "mocktest-header",
            h1 { "Abhyaas 1.0 - Test Series" }
            p { "Select a test to begin your practice session." }
        }
        div { class: "paper-grid",
            for card in cards {
                PaperTile { vm, card }
            }
        }
    }
}

#[component]
fn PaperTile(mut vm: Signal<ExamVm>, card: PaperCard) -> Element {
    let paper_id = card.id;

    rsx! {
        div { class: "paper-card",
            div { class: "paper-card__body",
                h2 { "{card.name}" }
                p { class: "paper-card__meta", "{card.question_count} Questions" }
                p { class: "paper-card__meta", "{card.duration_mins} Minutes" }
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| {
                    // The id came from the service's own list; the page-level
                    // effect picks the new attempt up and starts its timer.
                    let _ = vm.write().start(paper_id);
                },
                "Start Test"
            }
        }
    }
}
