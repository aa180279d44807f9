//! # Session and profile models
//!
//! Defines the two data structures owned by the session layer:
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserProfile`] | The client's cached copy of a server-owned profile. Mirrors the wire shape of `/users/me`; `avatar` carries a data-URI or plain URL string. |
//! | [`Session`] | The whole authentication state: optional profile, optional bearer token, and the derived `is_authenticated` flag. Serialises with camelCase names so the durable snapshot matches what the API and older clients expect. |
//!
//! `is_authenticated` is true if and only if both `user` and `token` are
//! present. [`Session::authenticated`] and [`Session::anonymous`] are the only
//! constructors, so the flag cannot drift from the fields.

use serde::{Deserialize, Serialize};

/// Client-side copy of a server-owned user profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Data-URI or URL string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserProfile {
    /// First letter of the display name, used for avatar placeholders.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

/// The authenticated (or anonymous) session held in memory and persisted
/// as a whole-state snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: Option<UserProfile>,
    pub token: Option<String>,
    pub is_authenticated: bool,
}

impl Session {
    /// A logged-in session. Sets the derived flag.
    pub fn authenticated(user: UserProfile, token: String) -> Self {
        Self {
            user: Some(user),
            token: Some(token),
            is_authenticated: true,
        }
    }

    /// A logged-out session.
    pub fn anonymous() -> Self {
        Self::default()
    }
}
