//! Wire types for the Linkdeck HTTP API.
//!
//! Field names match the JSON the server sends and expects (camelCase where
//! the wire uses it). [`store::UserProfile`] is reused as the profile shape so
//! the session layer and the facade agree on one type.

mod feedback;
mod link;
mod user;

pub use feedback::{FeedbackItem, FeedbackPayload, FeedbackStats, FeedbackUpdate, Paged};
pub use link::{LinkItem, LinkPayload, ReorderRequest};
pub use user::{AuthResponse, LoginRequest, ProfileUpdate, RegisterRequest};
