use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{
    HomeView, LoginView, MockTestView, NotFoundView, ProgressView, ResourcesView, SignupView,
    TipsView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/mocktest", MockTestView)] MockTest {},
        #[route("/progress", ProgressView)] Progress {},
        #[route("/resources", ResourcesView)] Resources {},
        #[route("/tips", TipsView)] Tips {},
        #[route("/login", LoginView)] Login {},
        #[route("/signup", SignupView)] Signup {},
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            TopNav {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn TopNav() -> Element {
    rsx! {
        header { class: "topnav",
            h1 { class: "topnav__brand", Link { to: Route::Home {}, "Abhyaas" } }
            nav { class: "topnav__links",
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::Resources {}, "Resources" }
                Link { to: Route::Progress {}, "Progress" }
                Link { to: Route::MockTest {}, "Mock Tests" }
                Link { to: Route::Tips {}, "Tips & Tricks" }
            }
            Link { class: "topnav__signin", to: Route::Login {}, "Sign In" }
        }
    }
}
