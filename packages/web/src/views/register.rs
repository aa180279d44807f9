//! Registration page. A successful registration is also the first login:
//! the response token goes straight into the session.

use api::RegisterRequest;
use dioxus::prelude::*;
use ui::{
    session_login, use_api, use_form_errors, use_session, Button, FormField, Label, Rule, Textarea,
};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let api = use_api();
    let mut session = use_session();
    let nav = use_navigator();

    let mut name = use_signal(String::new);
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut bio = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    // server rejection lands here, not on a field
    let mut form_error = use_signal(|| Option::<String>::None);
    let mut errors = use_form_errors();

    if session().is_authenticated {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let handle_submit = move |_| {
        form_error.set(None);
        let name_ok = errors.check("name", "Name", &name(), &[Rule::Required]);
        let username_ok = errors.check("username", "Username", &username(), &[Rule::Required]);
        let email_ok = errors.check("email", "Email", &email(), &[Rule::Required, Rule::Email]);
        let password_ok = errors.check(
            "password",
            "Password",
            &password(),
            &[Rule::Required, Rule::MinLength(6)],
        );
        if !(name_ok && username_ok && email_ok && password_ok) {
            return;
        }

        let api = api.clone();
        spawn(async move {
            submitting.set(true);
            let request = RegisterRequest {
                email: email().trim().to_string(),
                password: password(),
                username: username().trim().to_string(),
                name: name().trim().to_string(),
                bio: Some(bio()).filter(|b| !b.trim().is_empty()),
            };
            match api.register(&request).await {
                Ok(response) => {
                    session_login(&mut session, &api, &response.access_token, response.user);
                    nav.push(Route::Dashboard {});
                }
                Err(err) => form_error.set(Some(err.user_message("Registration failed"))),
            }
            submitting.set(false);
        });
    };

    rsx! {
        main { class: "auth-page",
            div { class: "auth-panel",
                h1 { class: "page-title", "Create Account" }
                div { class: "auth-form",
                    if let Some(message) = form_error() {
                        div { class: "form-error", "{message}" }
                    }
                    div { class: "auth-field-row",
                        FormField {
                            name: "name",
                            label: "Name",
                            placeholder: "Your full name",
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                            errors,
                        }
                        FormField {
                            name: "username",
                            label: "Username",
                            placeholder: "Your username",
                            value: username(),
                            oninput: move |evt: FormEvent| username.set(evt.value()),
                            errors,
                        }
                    }
                    FormField {
                        name: "email",
                        label: "Email",
                        r#type: "email",
                        placeholder: "Your email address",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                        errors,
                    }
                    FormField {
                        name: "password",
                        label: "Password",
                        r#type: "password",
                        placeholder: "Your password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                        errors,
                    }
                    div { class: "form-field",
                        Label { html_for: "bio", "Bio (optional)" }
                        Textarea {
                            id: "bio",
                            placeholder: "Tell us a little about yourself...",
                            value: bio(),
                            oninput: move |evt: FormEvent| bio.set(evt.value()),
                        }
                    }
                    div { class: "auth-submit",
                        Button {
                            disabled: submitting(),
                            onclick: handle_submit,
                            if submitting() { "Creating..." } else { "Create Account" }
                        }
                    }
                }
                p { class: "auth-switch",
                    "I already have an account? "
                    Link { class: "auth-switch-link", to: Route::Login {}, "Access Account" }
                }
            }
        }
    }
}
