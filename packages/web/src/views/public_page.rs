//! The public `/:username` page. Profile and links load together; any
//! failure on either call renders the not-found page.

use api::LinkItem;
use dioxus::prelude::*;
use store::UserProfile;
use ui::{use_api, PublicProfile};

use super::NotFoundContent;

#[derive(Clone, PartialEq)]
enum PageState {
    Loading,
    Ready(UserProfile, Vec<LinkItem>),
    NotFound,
}

#[component]
pub fn PublicPage(username: String) -> Element {
    let api = use_api();
    let mut page = use_signal(|| PageState::Loading);

    // Track the route param in a signal so the loader re-runs on change
    let mut username_signal = use_signal(|| username.clone());
    if *username_signal.peek() != username {
        username_signal.set(username.clone());
    }

    let _loader = use_resource(move || {
        let api = api.clone();
        let username = username_signal();
        async move {
            page.set(PageState::Loading);
            let Ok(user) = api.get_public_profile(&username).await else {
                page.set(PageState::NotFound);
                return;
            };
            match api.get_public_links(&username).await {
                Ok(links) => page.set(PageState::Ready(user, links)),
                Err(_) => page.set(PageState::NotFound),
            }
        }
    });

    match page() {
        PageState::Loading => rsx! {
            div { class: "page-loading", "Loading..." }
        },
        PageState::NotFound => rsx! {
            NotFoundContent {}
        },
        PageState::Ready(user, links) => rsx! {
            div { class: "public-page",
                header { class: "public-page-header",
                    h1 { class: "page-title", "Hi: anonymous" }
                }
                PublicProfile { user, links }
            }
        },
    }
}
