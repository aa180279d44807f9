//! # SessionStore — durable authentication state
//!
//! This module is the core of the session layer. [`SessionStore`] owns the
//! mapping between the in-memory [`Session`] and durable client storage, via
//! the [`StorageBackend`] trait, so the same logic works against browser
//! localStorage (web), flat files (native), or an in-memory map (tests).
//!
//! ## Storage layout
//!
//! Two fixed keys, written together:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"linkdeck_token"`) | the raw bearer token, read when building request authorization headers |
//! | [`STATE_KEY`] (`"auth-storage"`) | the whole [`Session`] as JSON, read once at startup to rehydrate |
//!
//! Every state change writes the snapshot *and* the token key inside the same
//! operation, so the token held in memory and the token in storage never
//! diverge.
//!
//! ## Operations
//!
//! | Method | Effect |
//! |--------|--------|
//! | [`load`](SessionStore::load) | Rehydrate from the snapshot; missing or corrupt data yields an anonymous session. |
//! | [`login`](SessionStore::login) | Persist the token under [`TOKEN_KEY`], then the authenticated snapshot. |
//! | [`logout`](SessionStore::logout) | Remove the token, write an anonymous snapshot. Idempotent. |
//! | [`update_user`](SessionStore::update_user) | Replace the profile; the token is untouched. |
//! | [`token`](SessionStore::token) | Read the raw token key. |
//!
//! None of these operations can fail: storage write failures are swallowed by
//! the backend (a hard dependency on storage being available).

use crate::backend::StorageBackend;
use crate::models::{Session, UserProfile};

/// Storage key for the raw bearer token.
pub const TOKEN_KEY: &str = "linkdeck_token";
/// Storage key for the serialised whole-state snapshot.
pub const STATE_KEY: &str = "auth-storage";

/// Session persistence over an abstract storage backend.
pub struct SessionStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> SessionStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Rehydrate the session from the durable snapshot.
    pub fn load(&self) -> Session {
        self.backend
            .get(STATE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_else(Session::anonymous)
    }

    /// Persist a successful login: token key first, then the snapshot.
    ///
    /// Returns the authenticated session for the caller to hold in memory.
    pub fn login(&self, token: &str, user: UserProfile) -> Session {
        self.backend.set(TOKEN_KEY, token);
        let session = Session::authenticated(user, token.to_string());
        self.persist(&session);
        session
    }

    /// Clear the session. Calling this when already logged out is a no-op
    /// side-effect-wise.
    pub fn logout(&self) -> Session {
        self.backend.remove(TOKEN_KEY);
        let session = Session::anonymous();
        self.persist(&session);
        session
    }

    /// Replace the stored profile without touching the token.
    pub fn update_user(&self, user: UserProfile) -> Session {
        let mut session = self.load();
        session.user = Some(user);
        self.persist(&session);
        session
    }

    /// The raw persisted token, if any.
    pub fn token(&self) -> Option<String> {
        self.backend.get(TOKEN_KEY)
    }

    fn persist(&self, session: &Session) {
        if let Ok(raw) = serde_json::to_string(session) {
            self.backend.set(STATE_KEY, &raw);
        }
    }
}
