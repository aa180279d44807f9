use dioxus::prelude::*;

use crate::Route;

/// Catch-all route target.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("no route matched: /{}", segments.join("/"));
    rsx! {
        NotFoundContent {}
    }
}

/// Shared not-found rendering, also used when a public profile lookup fails.
#[component]
pub fn NotFoundContent() -> Element {
    rsx! {
        div { class: "not-found",
            p { class: "not-found-code", "404" }
            h2 { class: "not-found-title", "Page not found" }
            p { class: "not-found-hint",
                "The requested resource could not be found. It may have been moved or removed."
            }
            Link { class: "btn btn-primary btn-md", to: Route::Home {}, "Back to homepage" }
        }
    }
}
