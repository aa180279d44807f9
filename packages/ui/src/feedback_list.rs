//! The dashboard's received-feedback list (first page only).

use chrono::DateTime;
use dioxus::prelude::*;

use crate::{use_api, use_collection, CollectionState};

const PAGE: u32 = 1;
const LIMIT: u32 = 10;

/// "May 1, 2024" from the server's timestamp; falls back to the raw string
/// when it does not parse.
fn format_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[component]
pub fn FeedbackList() -> Element {
    let api = use_api();
    let feedbacks = use_collection({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.get_my_feedbacks(PAGE, LIMIT).await.map(|page| page.data) }
        }
    });

    rsx! {
        section {
            class: "card feedback-list",
            header {
                class: "card-header",
                h2 { class: "card-title", "Recent Feedback" }
            }
            div {
                class: "card-content",
                {match feedbacks.value() {
                    CollectionState::Loading => rsx! {
                        div { class: "placeholder-list",
                            for i in 0..3 {
                                div { key: "{i}", class: "placeholder-row" }
                            }
                        }
                    },
                    CollectionState::Failed(message) => rsx! {
                        p { class: "load-error", "{message}" }
                    },
                    CollectionState::Ready(items) if items.is_empty() => rsx! {
                        div { class: "empty-state",
                            p { class: "empty-title", "No feedback yet" }
                            p { class: "empty-hint", "Share your profile to receive feedback!" }
                        }
                    },
                    CollectionState::Ready(items) => rsx! {
                        ul { class: "feedback-rows",
                            for item in items {
                                li {
                                    key: "{item.id}",
                                    class: "feedback-row",
                                    div { class: "feedback-row-meta",
                                        span { class: "feedback-date", {format_date(&item.created_at)} }
                                        if item.is_public {
                                            span { class: "badge badge-public", "Public" }
                                        } else {
                                            span { class: "badge badge-private", "Private" }
                                        }
                                    }
                                    p { class: "feedback-content", "{item.content}" }
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-05-01T10:00:00.000Z"), "May 1, 2024");
        assert_eq!(format_date("2026-12-31T23:59:59+00:00"), "Dec 31, 2026");
    }

    #[test]
    fn test_format_date_passthrough() {
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
