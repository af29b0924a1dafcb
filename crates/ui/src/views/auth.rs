use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

// Stub forms only; there is no account backend.

#[component]
pub fn LoginView() -> Element {
    rsx! {
        div { class: "page auth-page",
            div { class: "auth-card",
                h1 { "Sign In" }
                label { class: "field",
                    span { "Email" }
                    input { r#type: "email", placeholder: "you@example.com" }
                }
                label { class: "field",
                    span { "Password" }
                    input { r#type: "password" }
                }
                button { class: "btn btn-primary", "Sign In" }
                p { class: "auth-card__switch",
                    "New to Abhyaas? "
                    Link { to: Route::Signup {}, "Create an account" }
                }
            }
        }
    }
}

#[component]
pub fn SignupView() -> Element {
    rsx! {
        div { class: "page auth-page",
            div { class: "auth-card",
                h1 { "Create Account" }
                label { class: "field",
                    span { "Name" }
                    input { placeholder: "Your name" }
                }
                label { class: "field",
                    span { "Email" }
                    input { r#type: "email", placeholder: "you@example.com" }
                }
                label { class: "field",
                    span { "Password" }
                    input { r#type: "password" }
                }
                button { class: "btn btn-primary", "Sign Up" }
                p { class: "auth-card__switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
