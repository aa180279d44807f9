//! The public link-in-bio page body: profile header, link list, and the
//! anonymous feedback form.
//!
//! Feedback content is validated client-side to 10..=1000 characters before
//! any request is built; a too-short or too-long submission never reaches
//! the network.

use api::{FeedbackPayload, LinkItem};
use dioxus::prelude::*;
use store::UserProfile;

use crate::{
    push_toast, use_api, use_form_errors, use_toasts, Button, ButtonVariant, Rule, Textarea,
    ToastLevel,
};

pub const FEEDBACK_MIN_CHARS: usize = 10;
pub const FEEDBACK_MAX_CHARS: usize = 1000;

#[component]
pub fn PublicProfile(user: UserProfile, links: Vec<LinkItem>) -> Element {
    let api = use_api();
    let toasts = use_toasts();
    let mut content = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut submitted = use_signal(|| false);
    let mut errors = use_form_errors();

    let username = user.username.clone();
    let handle_submit = move |_| {
        let rules = [
            Rule::MinLength(FEEDBACK_MIN_CHARS),
            Rule::MaxLength(FEEDBACK_MAX_CHARS),
        ];
        if !errors.check("content", "Feedback", &content(), &rules) {
            return;
        }
        let api = api.clone();
        let username = username.clone();
        let mut toasts = toasts;
        spawn(async move {
            submitting.set(true);
            let payload = FeedbackPayload {
                content: content(),
                is_public: true,
            };
            match api.create_feedback(&username, &payload).await {
                Ok(_) => {
                    submitted.set(true);
                    content.set(String::new());
                }
                Err(err) => push_toast(
                    &mut toasts,
                    ToastLevel::Error,
                    &err.user_message("Failed to send feedback. Please try again."),
                ),
            }
            submitting.set(false);
        });
    };

    let count = content().chars().count();

    rsx! {
        div { class: "public-profile",
            div { class: "profile-header",
                if let Some(avatar) = user.avatar.as_ref().filter(|a| !a.is_empty()) {
                    img { class: "profile-avatar", src: "{avatar}", alt: "{user.name}" }
                } else {
                    div { class: "profile-avatar profile-avatar-initial", {user.initial()} }
                }
                h1 { class: "profile-name", "{user.name}" }
                if let Some(bio) = user.bio.as_ref().filter(|b| !b.is_empty()) {
                    p { class: "profile-bio", "{bio}" }
                }
            }

            ul { class: "profile-links",
                for link in links.iter() {
                    li {
                        key: "{link.id}",
                        a {
                            class: "profile-link",
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            span { class: "profile-link-title", "{link.title}" }
                            span { class: "profile-link-url", "{link.url}" }
                        }
                    }
                }
            }

            section { class: "feedback-form",
                h2 { class: "page-title", "Send us your anonymous feedback" }
                if submitted() {
                    div { class: "feedback-thanks",
                        p { "Thank you for your feedback!" }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| submitted.set(false),
                            "Send Another"
                        }
                    }
                } else {
                    Textarea {
                        placeholder: "Share your thoughts... (minimum 10 characters)",
                        maxlength: Some(FEEDBACK_MAX_CHARS as i64),
                        value: content(),
                        oninput: move |evt: FormEvent| {
                            content.set(evt.value());
                            errors.clear("content");
                        },
                    }
                    if let Some(message) = errors.get("content") {
                        p { class: "form-field-error", "{message}" }
                    }
                    div { class: "feedback-form-footer",
                        span { class: "char-count", "{count}/{FEEDBACK_MAX_CHARS}" }
                        Button {
                            disabled: submitting() || count < FEEDBACK_MIN_CHARS,
                            onclick: handle_submit,
                            if submitting() { "Sending..." } else { "Send Feedback" }
                        }
                    }
                }
            }
        }
    }
}
