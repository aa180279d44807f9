//! Login page: email + password, validated on submit.

use api::LoginRequest;
use dioxus::prelude::*;
use ui::{
    push_toast, session_login, use_api, use_form_errors, use_session, use_toasts, Button,
    FormField, Rule, ToastLevel,
};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut session = use_session();
    let mut toasts = use_toasts();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut errors = use_form_errors();

    // Already logged in: straight to the dashboard
    if session().is_authenticated {
        nav.replace(Route::Dashboard {});
        return rsx! {};
    }

    let handle_submit = move |_| {
        let email_ok = errors.check("email", "Email", &email(), &[Rule::Required, Rule::Email]);
        let password_ok = errors.check("password", "Password", &password(), &[Rule::Required]);
        if !(email_ok && password_ok) {
            return;
        }

        let api = api.clone();
        spawn(async move {
            submitting.set(true);
            let request = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            match api.login(&request).await {
                Ok(response) => {
                    session_login(&mut session, &api, &response.access_token, response.user);
                    push_toast(&mut toasts, ToastLevel::Success, "Login successful!");
                    nav.push(Route::Dashboard {});
                }
                Err(err) => {
                    push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        &err.user_message("Login failed. Please try again."),
                    );
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        main { class: "auth-page",
            div { class: "auth-panel",
                h1 { class: "page-title", "Access Account" }
                div { class: "auth-form",
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
                    div { class: "auth-submit",
                        Button {
                            disabled: submitting(),
                            onclick: handle_submit,
                            if submitting() { "Accessing..." } else { "Access Account" }
                        }
                    }
                }
                p { class: "auth-switch",
                    "Don't have an account? "
                    Link { class: "auth-switch-link", to: Route::Register {}, "Create Account" }
                }
            }
        }
    }
}
