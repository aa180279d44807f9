//! The dashboard's link collection manager.
//!
//! Loads the owner's links through the collection controller, and runs the
//! create/edit/delete mutations. Every successful mutation invalidates the
//! collection (refetch, never patch), shows a success toast, and closes the
//! modal; a failed mutation leaves the cached list untouched and surfaces
//! the server's message or a per-action fallback.

use api::{LinkItem, LinkPayload};
use dioxus::prelude::*;

use crate::{
    push_toast, use_api, use_collection, use_form_errors, use_toasts, Button, ButtonVariant,
    CollectionState, FormField, ModalOverlay, Rule, ToastLevel,
};

#[component]
pub fn LinksManager() -> Element {
    let api = use_api();
    let toasts = use_toasts();

    let links = use_collection({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.get_my_links().await }
        }
    });

    let mut modal_open = use_signal(|| false);
    let mut editing = use_signal(|| Option::<LinkItem>::None);
    let mut saving = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<LinkItem>::None);

    let handle_submit = {
        let api = api.clone();
        let links = links.clone();
        move |payload: LinkPayload| {
            let api = api.clone();
            let links = links.clone();
            let mut toasts = toasts;
            spawn(async move {
                saving.set(true);
                let target = (*editing.peek()).clone();
                let outcome = match &target {
                    Some(link) => api
                        .update_link(&link.id, &payload)
                        .await
                        .map(|_| "Link updated successfully!"),
                    None => api
                        .create_link(&payload)
                        .await
                        .map(|_| "Link created successfully!"),
                };
                match outcome {
                    Ok(message) => {
                        links.invalidate();
                        push_toast(&mut toasts, ToastLevel::Success, message);
                        modal_open.set(false);
                        editing.set(None);
                    }
                    Err(err) => {
                        let fallback = if target.is_some() {
                            "Failed to update link. Please try again."
                        } else {
                            "Failed to create link. Please try again."
                        };
                        push_toast(&mut toasts, ToastLevel::Error, &err.user_message(fallback));
                    }
                }
                saving.set(false);
            });
        }
    };

    let confirm_delete = {
        let api = api.clone();
        let links = links.clone();
        move |_| {
            let Some(link) = (*pending_delete.peek()).clone() else {
                return;
            };
            pending_delete.set(None);
            let api = api.clone();
            let links = links.clone();
            let mut toasts = toasts;
            spawn(async move {
                match api.delete_link(&link.id).await {
                    Ok(()) => {
                        links.invalidate();
                        push_toast(&mut toasts, ToastLevel::Success, "Link deleted successfully!");
                    }
                    Err(err) => push_toast(
                        &mut toasts,
                        ToastLevel::Error,
                        &err.user_message("Failed to delete link. Please try again."),
                    ),
                }
            });
        }
    };

    rsx! {
        section {
            class: "card links-manager",
            header {
                class: "card-header",
                h2 { class: "card-title", "My Links" }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        editing.set(None);
                        modal_open.set(true);
                    },
                    "+ Add Link"
                }
            }
            div {
                class: "card-content",
                {match links.value() {
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
                            p { class: "empty-title", "No links yet" }
                            p { class: "empty-hint", "Add your first link to get started!" }
                        }
                    },
                    CollectionState::Ready(items) => rsx! {
                        ul { class: "link-rows",
                            for link in items {
                                li {
                                    key: "{link.id}",
                                    class: "link-row",
                                    div { class: "link-row-text",
                                        p { class: "link-row-title", "{link.title}" }
                                        p { class: "link-row-url", "{link.url}" }
                                    }
                                    div { class: "link-row-actions",
                                        Button {
                                            variant: ButtonVariant::Secondary,
                                            onclick: {
                                                let link = link.clone();
                                                move |_| {
                                                    editing.set(Some(link.clone()));
                                                    modal_open.set(true);
                                                }
                                            },
                                            "Edit"
                                        }
                                        Button {
                                            variant: ButtonVariant::Secondary,
                                            onclick: {
                                                let link = link.clone();
                                                move |_| pending_delete.set(Some(link.clone()))
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    },
                }}
            }
        }

        if modal_open() {
            LinkModal {
                editing: editing(),
                saving: saving(),
                on_submit: handle_submit,
                on_close: move |_| {
                    modal_open.set(false);
                    editing.set(None);
                },
            }
        }

        if let Some(link) = pending_delete() {
            ModalOverlay {
                on_close: move |_| pending_delete.set(None),
                div { class: "confirm-delete",
                    h3 { "Delete Link" }
                    p {
                        "Are you sure you want to delete \"{link.title}\"? This action cannot be undone."
                    }
                    div { class: "confirm-actions",
                        Button { onclick: confirm_delete, "Delete" }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| pending_delete.set(None),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}

/// Create/edit form shown in a modal. Mounted fresh on every open, so the
/// fields initialise from the link being edited (or empty for create).
#[component]
fn LinkModal(
    editing: Option<LinkItem>,
    saving: bool,
    on_submit: EventHandler<LinkPayload>,
    on_close: EventHandler<()>,
) -> Element {
    let is_edit = editing.is_some();
    let mut title = use_signal(|| {
        editing
            .as_ref()
            .map(|link| link.title.clone())
            .unwrap_or_default()
    });
    let mut url = use_signal(|| {
        editing
            .as_ref()
            .map(|link| link.url.clone())
            .unwrap_or_default()
    });
    let mut errors = use_form_errors();

    let handle_save = move |_| {
        let title_ok = errors.check("title", "Title", &title(), &[Rule::Required]);
        let url_ok = errors.check("url", "URL", &url(), &[Rule::Required]);
        if title_ok && url_ok {
            on_submit.call(LinkPayload {
                title: title().trim().to_string(),
                url: url().trim().to_string(),
            });
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            div { class: "modal-body",
                header { class: "modal-header",
                    h2 {
                        if is_edit { "Edit Link" } else { "Add New Link" }
                    }
                    button {
                        r#type: "button",
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                FormField {
                    name: "title",
                    label: "Title",
                    placeholder: "My YouTube Channel",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                    errors,
                }
                FormField {
                    name: "url",
                    label: "URL",
                    placeholder: "https://youtube.com/@mychannel",
                    value: url(),
                    oninput: move |evt: FormEvent| url.set(evt.value()),
                    errors,
                }
                div { class: "modal-actions",
                    Button {
                        disabled: saving,
                        onclick: handle_save,
                        if saving {
                            "Saving..."
                        } else if is_edit {
                            "Update Link"
                        } else {
                            "Add Link"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
