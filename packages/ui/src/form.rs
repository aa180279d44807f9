//! # Form validation layer
//!
//! Per-field declarative rules evaluated at submit time. A field's rules are
//! checked in order and the first failure wins; the resulting message is
//! recorded in [`FormErrors`] and rendered beside the field by [`FormField`].
//! A submit only reaches the API facade once every field passes — validation
//! failures never leave this layer.
//!
//! | Rule | Passes when |
//! |------|-------------|
//! | [`Rule::Required`] | non-empty after trim |
//! | [`Rule::Email`] | matches the `nonwhitespace@nonwhitespace` shape |
//! | [`Rule::MinLength`] | at least `n` characters |
//! | [`Rule::MaxLength`] | at most `n` characters |

use std::collections::HashMap;

use dioxus::prelude::*;

use crate::components::{Input, Label};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rule {
    Required,
    Email,
    MinLength(usize),
    MaxLength(usize),
}

/// Evaluate `rules` against `value`, returning the first failure message.
pub fn validate_value(label: &str, value: &str, rules: &[Rule]) -> Option<String> {
    for rule in rules {
        match rule {
            Rule::Required => {
                if value.trim().is_empty() {
                    return Some(format!("{label} is required"));
                }
            }
            Rule::Email => {
                if !is_email_shaped(value) {
                    return Some("Invalid email address".to_string());
                }
            }
            Rule::MinLength(min) => {
                if value.chars().count() < *min {
                    return Some(format!("{label} must be at least {min} characters"));
                }
            }
            Rule::MaxLength(max) => {
                if value.chars().count() > *max {
                    return Some(format!("{label} must be {max} characters or fewer"));
                }
            }
        }
    }
    None
}

/// The `\S+@\S+` check: one `@`, non-empty halves, no whitespace anywhere.
fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

/// Per-field error map held in a signal, shared between a form's fields.
#[derive(Clone, Copy, PartialEq)]
pub struct FormErrors {
    errors: Signal<HashMap<String, String>>,
}

/// Create the error map for a form.
pub fn use_form_errors() -> FormErrors {
    FormErrors {
        errors: use_signal(HashMap::new),
    }
}

impl FormErrors {
    /// Validate one field, recording or clearing its error. Returns whether
    /// the field passed.
    pub fn check(&mut self, field: &str, label: &str, value: &str, rules: &[Rule]) -> bool {
        match validate_value(label, value, rules) {
            Some(message) => {
                self.errors.write().insert(field.to_string(), message);
                false
            }
            None => {
                self.errors.write().remove(field);
                true
            }
        }
    }

    /// The current error for a field, if any.
    pub fn get(&self, field: &str) -> Option<String> {
        self.errors.read().get(field).cloned()
    }

    /// Clear-error action: removes only this field's error.
    pub fn clear(&mut self, field: &str) {
        self.errors.write().remove(field);
    }

    pub fn clear_all(&mut self) {
        self.errors.write().clear();
    }
}

/// Labelled input with its field error and a clear-error button.
#[component]
pub fn FormField(
    name: String,
    label: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    errors: FormErrors,
) -> Element {
    let error = errors.get(&name);
    let field = name.clone();

    rsx! {
        div {
            class: "form-field",
            Label { html_for: name.clone(), "{label}" }
            div {
                class: "form-field-control",
                Input {
                    id: name.clone(),
                    r#type,
                    placeholder,
                    value,
                    error: error.is_some(),
                    oninput: move |evt| oninput.call(evt),
                }
                if error.is_some() {
                    button {
                        r#type: "button",
                        class: "form-field-clear",
                        onclick: {
                            let mut errors = errors;
                            let field = field.clone();
                            move |_| errors.clear(&field)
                        },
                        "✕"
                    }
                }
            }
            if let Some(message) = error {
                p { class: "form-field-error", "{message}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_trims() {
        assert_eq!(
            validate_value("Name", "   ", &[Rule::Required]),
            Some("Name is required".to_string())
        );
        assert_eq!(validate_value("Name", " a ", &[Rule::Required]), None);
    }

    #[test]
    fn test_email_shape() {
        let rules = [Rule::Required, Rule::Email];
        assert_eq!(validate_value("Email", "a@b.com", &rules), None);
        assert_eq!(validate_value("Email", "a@b", &rules), None);
        assert_eq!(
            validate_value("Email", "nope", &rules),
            Some("Invalid email address".to_string())
        );
        assert_eq!(
            validate_value("Email", "a @b.com", &rules),
            Some("Invalid email address".to_string())
        );
        assert_eq!(
            validate_value("Email", "@b.com", &rules),
            Some("Invalid email address".to_string())
        );
    }

    #[test]
    fn test_first_failure_wins() {
        // empty value fails Required before Email is consulted
        assert_eq!(
            validate_value("Email", "", &[Rule::Required, Rule::Email]),
            Some("Email is required".to_string())
        );
    }

    #[test]
    fn test_password_min_length() {
        let rules = [Rule::Required, Rule::MinLength(6)];
        assert_eq!(
            validate_value("Password", "12345", &rules),
            Some("Password must be at least 6 characters".to_string())
        );
        assert_eq!(validate_value("Password", "123456", &rules), None);
    }

    #[test]
    fn test_feedback_length_boundaries() {
        let rules = [Rule::MinLength(10), Rule::MaxLength(1000)];
        assert!(validate_value("Feedback", &"x".repeat(9), &rules).is_some());
        assert_eq!(validate_value("Feedback", &"x".repeat(10), &rules), None);
        assert_eq!(validate_value("Feedback", &"x".repeat(1000), &rules), None);
        assert!(validate_value("Feedback", &"x".repeat(1001), &rules).is_some());
    }
}
