use dioxus::prelude::*;

const TIPS: [&str; 7] = [
    "Practice coding regularly and time yourself.",
    "Use the STAR method for answering behavioral questions.",
    "Mock interviews with peers or AI can boost confidence.",
    "Keep your resume concise and tailored to each role.",
    "Review company-specific interview patterns before the interview.",
    "Stay calm and think aloud during problem-solving questions.",
    "Take feedback seriously and iterate on your performance.",
];

#[component]
pub fn TipsView() -> Element {
    rsx! {
        div { class: "page tips-page",
            header { class: "tips-header",
                h1 { "Tips & Tricks" }
                p { "These actionable tips will help you prepare better and boost your interview success." }
            }
            ul { class: "tips-list",
                for (index, tip) in TIPS.iter().enumerate() {
                    li { class: "tip-card",
                        span { class: "tip-card__number", "{index + 1}." }
                        span { "{tip}" }
                    }
                }
            }
        }
    }
}
