//! Profile editor: name, bio, and avatar. Email is shown but immutable
//! client-side; the avatar travels as an inline data-URI with no client-side
//! size cap.

use api::ProfileUpdate;
use base64::prelude::*;
use dioxus::prelude::*;
use ui::{
    push_toast, session_update_user, use_api, use_form_errors, use_session, use_toasts, Button,
    FormField, Label, Rule, Textarea, ToastLevel,
};

use crate::Route;

/// Inline the selected image as a data-URI, the format the API stores.
fn data_uri(file_name: &str, bytes: &[u8]) -> String {
    let mime = match file_name
        .rsplit('.')
        .next()
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "image/png",
    };
    format!("data:{mime};base64,{}", BASE64_STANDARD.encode(bytes))
}

#[component]
pub fn Profile() -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let current = session.peek().user.clone();
    let mut name = use_signal(|| current.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let mut bio = use_signal(|| {
        current
            .as_ref()
            .and_then(|u| u.bio.clone())
            .unwrap_or_default()
    });
    let mut avatar = use_signal(|| {
        current
            .as_ref()
            .and_then(|u| u.avatar.clone())
            .unwrap_or_default()
    });
    let mut saving = use_signal(|| false);
    let mut errors = use_form_errors();

    let Some(user) = current else {
        nav.replace(Route::Login {});
        return rsx! {};
    };

    let handle_avatar = move |evt: FormEvent| {
        spawn(async move {
            if let Some(engine) = evt.files() {
                if let Some(file_name) = engine.files().first().cloned() {
                    if let Some(bytes) = engine.read_file(&file_name).await {
                        avatar.set(data_uri(&file_name, &bytes));
                    }
                }
            }
        });
    };

    let handle_save = move |_| {
        if !errors.check("name", "Full Name", &name(), &[Rule::Required]) {
            return;
        }
        let api = api.clone();
        spawn(async move {
            saving.set(true);
            let update = ProfileUpdate {
                name: Some(name().trim().to_string()),
                bio: Some(bio()),
                avatar: Some(avatar()),
            };
            match api.update_profile(&update).await {
                Ok(profile) => {
                    session_update_user(&mut session, profile);
                    push_toast(&mut toasts, ToastLevel::Success, "Profile updated successfully!");
                }
                Err(err) => push_toast(
                    &mut toasts,
                    ToastLevel::Error,
                    &err.user_message("Failed to update profile. Please try again."),
                ),
            }
            saving.set(false);
        });
    };

    rsx! {
        main { class: "profile-page",
            header { class: "profile-page-header",
                h1 { class: "page-title", "Profile" }
                div { class: "profile-page-actions",
                    Link { class: "btn btn-secondary btn-sm", to: Route::Dashboard {}, "Back" }
                    Button {
                        disabled: saving(),
                        onclick: handle_save,
                        if saving() { "Saving..." } else { "Save changes" }
                    }
                }
            }

            div { class: "profile-form",
                div { class: "avatar-editor",
                    div { class: "avatar-preview",
                        if !avatar().is_empty() {
                            img { class: "avatar-img", src: "{avatar}", alt: "Avatar" }
                            button {
                                r#type: "button",
                                class: "avatar-remove",
                                onclick: move |_| avatar.set(String::new()),
                                "✕"
                            }
                        } else {
                            div { class: "avatar-initial", {user.initial()} }
                        }
                    }
                    input {
                        r#type: "file",
                        id: "avatar-upload",
                        accept: "image/*",
                        class: "avatar-upload-input",
                        onchange: handle_avatar,
                    }
                    label { r#for: "avatar-upload", class: "btn btn-secondary btn-sm", "Change Avatar" }
                }

                div { class: "profile-field-row",
                    FormField {
                        name: "name",
                        label: "Full Name",
                        placeholder: "Your full name",
                        value: name(),
                        oninput: move |evt: FormEvent| name.set(evt.value()),
                        errors,
                    }
                    div { class: "form-field",
                        Label { html_for: "email", "Email Address" }
                        input {
                            id: "email",
                            r#type: "email",
                            class: "input",
                            value: "{user.email}",
                            readonly: true,
                            disabled: true,
                        }
                        p { class: "field-hint", "Email cannot be changed" }
                    }
                }

                div { class: "form-field",
                    Label { html_for: "bio", "Bio" }
                    Textarea {
                        id: "bio",
                        placeholder: "Tell us a little about yourself...",
                        value: bio(),
                        oninput: move |evt: FormEvent| bio.set(evt.value()),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri_mime_from_extension() {
        assert!(data_uri("me.jpg", b"x").starts_with("data:image/jpeg;base64,"));
        assert!(data_uri("me.PNG", b"x").starts_with("data:image/png;base64,"));
        assert!(data_uri("noext", b"x").starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_data_uri_encodes_payload() {
        assert_eq!(data_uri("a.png", b"abc"), "data:image/png;base64,YWJj");
    }
}
