use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { class: "page notfound-page",
            h1 { "Page Not Found" }
            p { "No page at /{path}." }
            Link { class: "btn btn-secondary", to: Route::Home {}, "Back to Home" }
        }
    }
}
