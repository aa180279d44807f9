//! Session context and hooks.
//!
//! [`AuthProvider`] owns the two pieces of ambient state every page needs:
//! the in-memory [`Session`] (as a signal) and the [`ApiClient`] carrying the
//! bearer token. Both are explicitly constructed here and handed down through
//! context rather than living in a global.
//!
//! State changes go through [`session_login`] / [`session_logout`] /
//! [`session_update_user`], which update durable storage, the client token,
//! and the signal inside one function — the in-memory session and the
//! persisted one never diverge.

use api::ApiClient;
use dioxus::prelude::*;
use store::{Session, UserProfile};

use crate::make_session_store;

/// Get the current session. Returns a signal that updates when the user
/// logs in or out.
pub fn use_session() -> Signal<Session> {
    use_context::<Signal<Session>>()
}

/// Get the shared API client.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}

/// Provider component that manages the session and the API client.
/// Wrap your app with this component; `base_url` is the API server root.
#[component]
pub fn AuthProvider(base_url: String, children: Element) -> Element {
    let client = use_context_provider(move || ApiClient::new(base_url));

    // Rehydrate once from durable storage; the token goes into the client so
    // authorized requests work from the first render.
    let session = use_signal({
        let client = client.clone();
        move || {
            let restored = make_session_store().load();
            if let Some(token) = restored.token.as_deref() {
                client.set_token(token);
            }
            restored
        }
    });
    use_context_provider(|| session);

    rsx! {
        {children}
    }
}

/// Record a successful login: persist the token and profile, install the
/// token on the client, and publish the new session.
pub fn session_login(
    session: &mut Signal<Session>,
    client: &ApiClient,
    token: &str,
    user: UserProfile,
) {
    client.set_token(token);
    session.set(make_session_store().login(token, user));
}

/// Clear the session everywhere. Safe to call when already logged out.
pub fn session_logout(session: &mut Signal<Session>, client: &ApiClient) {
    client.clear_token();
    session.set(make_session_store().logout());
}

/// Replace the profile after an edit; the token is untouched.
pub fn session_update_user(session: &mut Signal<Session>, user: UserProfile) {
    session.set(make_session_store().update_user(user));
}
