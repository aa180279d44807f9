//! Basic building-block components shared by every view.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ButtonSize {
    #[default]
    Sm,
    Md,
    Lg,
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: String,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let variant_class = match variant {
        ButtonVariant::Primary => "btn-primary",
        ButtonVariant::Secondary => "btn-secondary",
    };
    let size_class = match size {
        ButtonSize::Sm => "btn-sm",
        ButtonSize::Md => "btn-md",
        ButtonSize::Lg => "btn-lg",
    };

    rsx! {
        button {
            r#type: "button",
            class: "btn {variant_class} {size_class} {class}",
            disabled,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] class: String,
    #[props(default)] error: bool,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let error_class = if error { "input-error" } else { "" };

    rsx! {
        input {
            id,
            r#type,
            placeholder,
            class: "input {error_class} {class}",
            value,
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default)] id: String,
    #[props(default)] placeholder: String,
    #[props(default)] class: String,
    #[props(default)] maxlength: Option<i64>,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        textarea {
            id,
            placeholder,
            class: "textarea {class}",
            maxlength,
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            r#for: html_for,
            class: "label",
            {children}
        }
    }
}
