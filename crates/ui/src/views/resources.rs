use dioxus::prelude::*;

use exam_core::model::Category;

use crate::context::AppContext;

fn category_blurb(category: Category) -> &'static str {
    match category {
        Category::Coding => {
            "Data structures, algorithms, SQL, and web fundamentals. The foundation of every technical screening round."
        }
        Category::Aptitude => {
            "Arithmetic, ratios, time and work, and number puzzles. Speed and accuracy here set the placement cutoff."
        }
        Category::VerbalReasoning => {
            "Vocabulary, grammar, and logical reasoning. Quick wins for verbal rounds when practiced regularly."
        }
    }
}

/// Snapshot of one bank question for the accordion.
#[derive(Clone, PartialEq)]
struct StudyItem {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
}

#[component]
pub fn ResourcesView() -> Element {
    let ctx = use_context::<AppContext>();
    let bank = ctx.question_bank();
    let mut selected = use_signal(|| None::<Category>);
    let mut open_question = use_signal(|| None::<usize>);

    let items: Vec<StudyItem> = selected.read().map_or_else(Vec::new, |category| {
        bank.pool(category)
            .iter()
            .map(|question| StudyItem {
                prompt: question.prompt().to_owned(),
                options: question.options().to_vec(),
                correct_index: question.correct_index(),
            })
            .collect()
    });

    rsx! {
        div { class: "page resources-page",
            header { class: "resources-header",
                h1 { "Developer Interview Prep" }
                p { "Master the key topics to ace your next technical interview." }
            }

            section { class: "topic-picker",
                label { r#for: "topic-select", "Choose a topic to begin:" }
                select {
                    id: "topic-select",
                    class: "select",
                    onchange: move |evt| {
                        let category = Category::ALL
                            .into_iter()
                            .find(|c| c.label() == evt.value());
                        selected.set(category);
                        open_question.set(None);
                    },
                    option {
                        value: "",
                        selected: selected.read().is_none(),
                        disabled: true,
                        "--- Select a Topic ---"
                    }
                    for category in Category::ALL {
                        option {
                            value: "{category.label()}",
                            selected: *selected.read() == Some(category),
                            "{category.label()}"
                        }
                    }
                }
            }

            if selected.read().is_none() {
                section { class: "topic-overview",
                    h2 { "Why These Topics Matter" }
                    div { class: "topic-grid",
                        for category in Category::ALL {
                            div { class: "topic-card",
                                h3 { "{category.label()}" }
                                p { "{category_blurb(category)}" }
                            }
                        }
                    }
                }
            } else {
                ul { class: "study-list",
                    for (index, item) in items.iter().enumerate() {
                        StudyQuestion {
                            index,
                            item: item.clone(),
                            open: *open_question.read() == Some(index),
                            open_question,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StudyQuestion(
    index: usize,
    item: StudyItem,
    open: bool,
    mut open_question: Signal<Option<usize>>,
) -> Element {
    let number = index + 1;

    rsx! {
        li { class: "study-item",
            button {
                class: "study-item__toggle",
                onclick: move |_| {
                    let next = if open { None } else { Some(index) };
                    open_question.set(next);
                },
                "{number}. {item.prompt}"
            }
            if open {
                ul { class: "study-item__options",
                    for (opt_index, option) in item.options.iter().enumerate() {
                        li {
                            class: if opt_index == item.correct_index {
                                "study-option study-option--correct"
                            } else {
                                "study-option"
                            },
                            "{option}"
                            if opt_index == item.correct_index {
                                span { class: "study-option__tag", "(Answer)" }
                            }
                        }
                    }
                }
            }
        }
    }
}
