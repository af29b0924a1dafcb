use dioxus::document::eval;
use dioxus::prelude::*;

use exam_core::model::QuestionStatus;

use crate::vm::{ExamVm, format_countdown};

/// Per-question data snapshotted out of the vm for one render pass, so no
/// signal borrow is held inside event closures.
#[derive(Clone, PartialEq)]
struct QuestionRow {
    index: usize,
    category: String,
    prompt: String,
    options: Vec<String>,
    selected: Option<usize>,
    marked: bool,
    status: QuestionStatus,
}

#[component]
pub(super) fn TestInterface(mut vm: Signal<ExamVm>) -> Element {
    let (paper_name, timer_label, confirming, rows) = {
        let guard = vm.read();
        let Some(attempt) = guard.attempt() else {
            return rsx! {};
        };
        let rows: Vec<QuestionRow> = attempt
            .paper()
            .questions()
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionRow {
                index,
                category: question.category().label().to_owned(),
                prompt: question.prompt().to_owned(),
                options: question.options().to_vec(),
                selected: attempt.selection(index),
                marked: attempt.is_marked(index),
                status: attempt.question_status(index),
            })
            .collect();
        (
            attempt.paper().name().to_owned(),
            format_countdown(attempt.remaining_secs()),
            guard.confirming_submit(),
            rows,
        )
    };

    rsx! {
        header { class: "test-header",
            h1 { "{paper_name}" }
            div { class: "test-header__timer", "{timer_label}" }
        }
        div { class: "test-layout",
            div { class: "test-questions",
                for row in rows.clone() {
                    QuestionBlock { vm, row }
                }
            }
            aside { class: "test-sidebar",
                h3 { "Question Palette" }
                div { class: "palette-grid",
                    for row in rows {
                        PaletteButton { vm, index: row.index, status: row.status }
                    }
                }
                button {
                    class: "btn btn-submit",
                    onclick: move |_| vm.write().request_submit(),
                    "Submit Test"
                }
            }
        }
        if confirming {
            SubmitConfirm { vm }
        }
    }
}

#[component]
fn QuestionBlock(mut vm: Signal<ExamVm>, row: QuestionRow) -> Element {
    let index = row.index;
    let number = index + 1;
    let mark_class = if row.marked {
        "mark-toggle mark-toggle--on"
    } else {
        "mark-toggle"
    };

    rsx! {
        div { class: "question-block", id: "question-{index}",
            div { class: "question-block__top",
                p { class: "question-block__label", "Question {number} ({row.category})" }
                button {
                    class: "{mark_class}",
                    onclick: move |_| vm.write().toggle_mark(index),
                    "Mark for Review"
                }
            }
            h2 { class: "question-block__prompt", "{row.prompt}" }
            ul { class: "question-options",
                for (opt_index, option) in row.options.iter().enumerate() {
                    OptionRow {
                        vm,
                        question: index,
                        option: opt_index,
                        label: option.clone(),
                        selected: row.selected == Some(opt_index),
                    }
                }
            }
        }
    }
}

#[component]
fn OptionRow(
    mut vm: Signal<ExamVm>,
    question: usize,
    option: usize,
    label: String,
    selected: bool,
) -> Element {
    let class = if selected {
        "option-row option-row--selected"
    } else {
        "option-row"
    };

    rsx! {
        li {
            label { class: "{class}",
                input {
                    r#type: "radio",
                    name: "question-{question}",
                    checked: selected,
                    onchange: move |_| vm.write().select_option(question, option),
                }
                span { "{label}" }
            }
        }
    }
}

#[component]
fn PaletteButton(mut vm: Signal<ExamVm>, index: usize, status: QuestionStatus) -> Element {
    let number = index + 1;
    // Marked wins over answered, matching the attempt's status precedence.
    let class = match status {
        QuestionStatus::Marked => "palette-btn palette-btn--marked",
        QuestionStatus::Answered => "palette-btn palette-btn--answered",
        QuestionStatus::Unanswered => "palette-btn",
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                vm.write().set_active_question(index);
                let js = format!(
                    "document.getElementById('question-{index}')?.scrollIntoView({{ behavior: 'smooth', block: 'center' }});"
                );
                let _ = eval(&js);
            },
            "{number}"
        }
    }
}

#[component]
fn SubmitConfirm(mut vm: Signal<ExamVm>) -> Element {
    rsx! {
        div { class: "modal-overlay",
            div { class: "modal", role: "dialog", aria_modal: "true",
                h3 { "Submit Test" }
                p { "Are you sure you want to submit the test?" }
                div { class: "modal__actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| vm.write().cancel_submit(),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| vm.write().confirm_submit(),
                        "Submit"
                    }
                }
            }
        }
    }
}
