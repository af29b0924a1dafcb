use dioxus::prelude::*;

use exam_core::model::{AnswerOutcome, QuestionReview, TestReport};

use crate::vm::ExamVm;

#[component]
pub(super) fn ResultsPage(mut vm: Signal<ExamVm>) -> Element {
    let report: TestReport = {
        let guard = vm.read();
        match guard.report() {
            Some(report) => report.clone(),
            None => return rsx! {},
        }
    };
    let total = report.total();
    let score = report.score();

    rsx! {
        header { class: "mocktest-header",
            h1 { "Test Results" }
            p { "{report.paper_name()}" }
        }

        div { class: "score-card",
            h2 { "Your Score" }
            p { class: "score-card__score",
                "{score}"
                span { class: "score-card__total", "/{total}" }
            }
            div { class: "score-card__breakdown",
                span { class: "stat stat--correct", "{report.correct()} Correct" }
                span { class: "stat stat--incorrect", "{report.incorrect()} Incorrect" }
                span { class: "stat stat--unanswered", "{report.unanswered()} Unanswered" }
            }
        }

        div { class: "results-actions",
            button {
                class: "btn btn-primary",
                onclick: move |_| {
                    let _ = vm.write().retake();
                },
                "Retake Test"
            }
            button {
                class: "btn btn-secondary",
                onclick: move |_| vm.write().to_dashboard(),
                "Back to Dashboard"
            }
        }

        section { class: "review",
            h3 { "Review Your Answers" }
            ul { class: "review-list",
                for (index, review) in report.reviews().iter().enumerate() {
                    ReviewItem { number: index + 1, review: review.clone() }
                }
            }
        }
    }
}

#[component]
fn ReviewItem(number: usize, review: QuestionReview) -> Element {
    rsx! {
        li { class: "review-item",
            p { class: "review-item__prompt", "{number}. {review.prompt}" }
            ul { class: "review-item__options",
                for (opt_index, option) in review.options.iter().enumerate() {
                    {
                        let is_correct = opt_index == review.correct_index;
                        let is_wrong_choice = review.chosen == Some(opt_index)
                            && review.outcome == AnswerOutcome::Incorrect;
                        let class = if is_correct {
                            "review-option review-option--correct"
                        } else if is_wrong_choice {
                            "review-option review-option--wrong"
                        } else {
                            "review-option"
                        };
                        rsx! {
                            li { class: "{class}",
                                "{option}"
                                if is_correct {
                                    span { class: "review-option__tag", "(Correct Answer)" }
                                }
                                if is_wrong_choice {
                                    span { class: "review-option__tag", "(Your Answer)" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
