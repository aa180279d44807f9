//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

mod session;
pub use session::make_session_store;

mod auth;
pub use auth::{session_login, session_logout, session_update_user, use_api, use_session, AuthProvider};

mod collection;
pub use collection::{use_collection, Collection, CollectionState, FetchGate};

mod form;
pub use form::{use_form_errors, validate_value, FormErrors, FormField, Rule};

mod components;
pub use components::{Button, ButtonSize, ButtonVariant, Input, Label, Textarea};

mod modal;
pub use modal::ModalOverlay;

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastLevel, ToastProvider, Toasts};

mod links_manager;
pub use links_manager::LinksManager;

mod feedback_list;
pub use feedback_list::FeedbackList;

mod public_profile;
pub use public_profile::PublicProfile;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
