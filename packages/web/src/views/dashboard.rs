//! Owner dashboard: greeting header plus the links manager and the received
//! feedback list. Anonymous visitors are sent to the login page.

use dioxus::prelude::*;
use ui::{session_logout, use_api, use_session, Button, ButtonSize, FeedbackList, LinksManager};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let api = use_api();
    let mut session = use_session();
    let nav = use_navigator();

    let Some(user) = session().user else {
        nav.replace(Route::Login {});
        return rsx! {};
    };

    let handle_logout = move |_| {
        session_logout(&mut session, &api);
        nav.push(Route::Login {});
    };

    rsx! {
        div { class: "dashboard",
            header { class: "dashboard-header",
                h1 { class: "page-title", "Hi: {user.name}" }
                nav { class: "dashboard-nav",
                    Link {
                        class: "dashboard-public-link",
                        to: Route::PublicPage { username: user.username.clone() },
                        "Public Page"
                    }
                    Button { size: ButtonSize::Md, onclick: handle_logout, "Logout" }
                }
                Link { class: "dashboard-avatar", to: Route::Profile {},
                    if let Some(avatar) = user.avatar.as_ref().filter(|a| !a.is_empty()) {
                        img { class: "avatar-img", src: "{avatar}", alt: "{user.name}" }
                    } else {
                        div { class: "avatar-initial", {user.initial()} }
                    }
                }
            }
            main { class: "dashboard-main",
                LinksManager {}
                FeedbackList {}
            }
        }
    }
}
