use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

const COMPANIES: [&str; 8] = [
    "Google", "Microsoft", "Amazon", "Meta", "Apple", "Netflix", "Salesforce", "Oracle",
];

const FEATURES: [(&str, &str); 3] = [
    (
        "1. Select Your Target",
        "Choose top companies and roles to practice for real scenarios.",
    ),
    (
        "2. Practice Mock Tests",
        "Timed, full-length test papers sampled fresh from every topic.",
    ),
    (
        "3. Track Your Growth",
        "Log interviews and watch your averages and achievements climb.",
    ),
];

const STATS: [(&str, &str); 4] = [
    ("87%", "Success Rate"),
    ("50k+", "Active Users"),
    ("120+", "Companies"),
    ("4.9/5", "User Rating"),
];

const FAQ: [(&str, &str); 6] = [
    ("Is Abhyaas for beginners?", "Yes, from basics to advanced roles."),
    (
        "How are test papers built?",
        "Each paper samples 25 questions per topic, so no two papers feel the same.",
    ),
    (
        "Does it support non-tech roles?",
        "Yes, Product, Marketing, Consulting, etc.",
    ),
    (
        "Can I retake a test?",
        "As often as you like. Every retake starts from a clean sheet.",
    ),
    ("Is there a free plan?", "Yes, 1 full mock test free."),
    (
        "Any team/university packages?",
        "Yes, with admin dashboards and analytics.",
    ),
];

#[component]
pub fn HomeView() -> Element {
    let mut open_faq = use_signal(|| None::<usize>);

    rsx! {
        div { class: "page home-page",
            section { class: "hero",
                h2 { "Ace Interviews with Focused Practice" }
                p { "Realistic mock tests, actionable tracking, measurable growth." }
                Link { class: "btn btn-primary", to: Route::Signup {}, "Start Your Journey" }
            }

            section { class: "company-strip",
                for company in COMPANIES {
                    span { "{company}" }
                }
            }

            section { class: "features",
                h3 { "How It Works" }
                div { class: "feature-grid",
                    for (title, description) in FEATURES {
                        div { class: "feature-card",
                            h4 { "{title}" }
                            p { "{description}" }
                        }
                    }
                }
            }

            section { class: "stats-band",
                for (value, label) in STATS {
                    div { class: "stats-band__item",
                        p { class: "stats-band__value", "{value}" }
                        p { "{label}" }
                    }
                }
            }

            section { class: "faq",
                h3 { "FAQ" }
                for (index, (question, answer)) in FAQ.iter().enumerate() {
                    div { class: "faq-item",
                        button {
                            class: "faq-item__question",
                            onclick: move |_| {
                                let next = if *open_faq.read() == Some(index) {
                                    None
                                } else {
                                    Some(index)
                                };
                                open_faq.set(next);
                            },
                            "{question}"
                        }
                        if *open_faq.read() == Some(index) {
                            p { class: "faq-item__answer", "{answer}" }
                        }
                    }
                }
            }

            footer { class: "home-footer",
                h3 { "Ready to Land Your Dream Job?" }
                Link { class: "btn btn-primary", to: Route::Signup {}, "Get Started" }
            }
        }
    }
}
