//! # ApiError — the closed set of request outcomes
//!
//! Callers pattern-match on three variants instead of probing an untyped
//! error object for a response shape:
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | [`ApiError::Transport`] | No response at all (network failure, DNS, refused). |
//! | [`ApiError::Status`] | The server answered with a non-2xx status. `message` carries the structured `{"message": ...}` body when the server supplied one. |
//! | [`ApiError::Decode`] | A 2xx body that failed to deserialize. |
//!
//! [`ApiError::user_message`] reduces any variant to a human-readable string,
//! preferring the server-supplied message over the caller's hardcoded
//! fallback — the error-reduction policy every call site follows.

use serde::Deserialize;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("server rejected request with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the server answered 404 — used by the profile-lookup path,
    /// which maps any failure to a not-found page.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }

    /// Reduce to a human-readable string: the server-supplied message when
    /// present, else the caller's per-action fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// The server's structured error body. NestJS-style APIs send either
/// `{"message": "text"}` or `{"message": ["first", ...]}`.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<ErrorMessage>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

/// Extract the server-supplied message from a non-2xx response body, if the
/// body parses as the structured shape.
pub(crate) fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.message? {
        ErrorMessage::One(message) => Some(message),
        ErrorMessage::Many(messages) => messages.into_iter().next(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_string() {
        assert_eq!(
            server_message("{\"message\":\"Invalid credentials\"}"),
            Some("Invalid credentials".to_string())
        );
    }

    #[test]
    fn test_server_message_array_takes_first() {
        assert_eq!(
            server_message("{\"message\":[\"email must be unique\",\"other\"]}"),
            Some("email must be unique".to_string())
        );
    }

    #[test]
    fn test_server_message_garbage_is_none() {
        assert_eq!(server_message("<html>502</html>"), None);
        assert_eq!(server_message(""), None);
        assert_eq!(server_message("{\"error\":\"no message field\"}"), None);
    }

    #[test]
    fn test_user_message_prefers_server() {
        let err = ApiError::Status {
            status: 409,
            message: Some("Username already taken".to_string()),
        };
        assert_eq!(err.user_message("Registration failed"), "Username already taken");
    }

    #[test]
    fn test_user_message_falls_back() {
        let err = ApiError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(
            err.user_message("Login failed. Please try again."),
            "Login failed. Please try again."
        );
        let err = ApiError::Transport("connection refused".to_string());
        assert_eq!(err.user_message("fallback"), "fallback");
    }

    #[test]
    fn test_is_not_found() {
        let err = ApiError::Status {
            status: 404,
            message: None,
        };
        assert!(err.is_not_found());
        let err = ApiError::Status {
            status: 403,
            message: None,
        };
        assert!(!err.is_not_found());
        assert!(!ApiError::Transport("x".to_string()).is_not_found());
    }
}
