use dioxus::prelude::*;

use ui::{AuthProvider, ToastProvider};
use views::{Dashboard, Home, Login, NotFound, Profile, PublicPage, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/auth/login")]
    Login {},
    #[route("/auth/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/profile")]
    Profile {},
    #[route("/:username")]
    PublicPage { username: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const VIEWS_CSS: Asset = asset!("/assets/views.css");

/// API server root, baked in at build time.
fn api_base_url() -> String {
    option_env!("LINKDECK_API_URL")
        .unwrap_or("http://localhost:3001")
        .to_string()
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }
        document::Link { rel: "stylesheet", href: VIEWS_CSS }

        AuthProvider {
            base_url: api_base_url(),
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
