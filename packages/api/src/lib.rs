//! # API crate — typed client facade over the Linkdeck HTTP API
//!
//! This crate is the only place that talks to the remote API server. It
//! translates a fixed set of logical operations into HTTP requests carrying a
//! bearer token and fixed JSON payload shapes, and returns either the decoded
//! response or an [`ApiError`] from a closed set of outcomes. No retry, no
//! backoff, no request coalescing: each call is one-shot, and callers decide
//! how to surface failures.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL + shared bearer token + request plumbing |
//! | [`error`] | [`ApiError`]: transport / server-rejection / decode taxonomy |
//! | [`models`] | Wire types for every request and response body |
//!
//! ## Operations, grouped by resource
//!
//! - **auth** (`auth.rs`): `login`, `register`
//! - **users** (`users.rs`): `get_me`, `update_profile`, `get_public_profile`
//! - **links** (`links.rs`): `get_my_links`, `create_link`, `update_link`,
//!   `delete_link`, `reorder_links`, `get_public_links`
//! - **feedback** (`feedback.rs`): `get_my_feedbacks`, `create_feedback`,
//!   `update_feedback`, `delete_feedback`, `get_stats`, `get_public_feedbacks`

pub mod client;
pub mod error;
pub mod models;

mod auth;
mod feedback;
mod links;
mod users;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    AuthResponse, FeedbackItem, FeedbackPayload, FeedbackStats, FeedbackUpdate, LinkItem,
    LinkPayload, LoginRequest, Paged, ProfileUpdate, RegisterRequest,
};

pub use store::UserProfile;
