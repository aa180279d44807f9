//! # ApiClient — request plumbing shared by every facade call
//!
//! One [`ApiClient`] is constructed at app start and handed to whatever needs
//! it (views receive it through context). It owns:
//!
//! - the base URL of the remote API,
//! - a shared [`reqwest::Client`],
//! - the current bearer token, held behind `Arc<RwLock>` so the login/logout
//!   flows can swap it without tearing down the client.
//!
//! The client is explicitly constructed and injected rather than read from a
//! global, which keeps the session/request contract testable in isolation.
//!
//! Requests are one-shot: no retry, no backoff, no explicit timeout (the
//! transport default applies), and not cancelable once issued — a stale
//! response may resolve after newer state; consumers guard against that with
//! sequence-tagged fetches (see the ui collection controller).

use std::sync::{Arc, RwLock};

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{server_message, ApiError};

#[derive(Clone, Debug, Default)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Arc<RwLock<Option<String>>>,
}

impl ApiClient {
    /// A client rooted at `base_url` (trailing slash tolerated), with no
    /// bearer token yet.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
            token: Arc::new(RwLock::new(None)),
        }
    }

    /// Install the bearer token attached to subsequent authorized requests.
    pub fn set_token(&self, token: &str) {
        *self.token.write().unwrap() = Some(token.to_string());
    }

    /// Drop the bearer token; subsequent requests go out unauthenticated.
    pub fn clear_token(&self) {
        *self.token.write().unwrap() = None;
    }

    /// The currently installed bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) fn get(&self, path: &str) -> RequestBuilder {
        self.http.get(self.url(path))
    }

    pub(crate) fn post(&self, path: &str) -> RequestBuilder {
        self.http.post(self.url(path))
    }

    pub(crate) fn patch(&self, path: &str) -> RequestBuilder {
        self.http.patch(self.url(path))
    }

    pub(crate) fn put(&self, path: &str) -> RequestBuilder {
        self.http.put(self.url(path))
    }

    pub(crate) fn delete(&self, path: &str) -> RequestBuilder {
        self.http.delete(self.url(path))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token.read().unwrap().as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and decode a JSON response body.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: server_message(&body),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send a request where the response body does not matter (DELETE).
    pub(crate) async fn send_unit(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: server_message(&body),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = ApiClient::new("http://localhost:3001/");
        assert_eq!(client.url("/links"), "http://localhost:3001/links");

        let client = ApiClient::new("https://api.linkdeck.app");
        assert_eq!(
            client.url("/users/profile/ghost"),
            "https://api.linkdeck.app/users/profile/ghost"
        );
    }

    #[test]
    fn test_token_swap_is_shared_across_clones() {
        let client = ApiClient::new("http://localhost:3001");
        let clone = client.clone();

        assert_eq!(clone.token(), None);
        client.set_token("t1");
        assert_eq!(clone.token().as_deref(), Some("t1"));
        clone.clear_token();
        assert_eq!(client.token(), None);
    }
}
