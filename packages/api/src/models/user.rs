use serde::{Deserialize, Serialize};

use store::UserProfile;

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /users`. Uniqueness of `username`/`email` is enforced
/// server-side only.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub username: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Response of both auth endpoints: a bearer token plus the profile.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: UserProfile,
}

/// Body of `PATCH /users/me`. Email and username are immutable client-side
/// and never sent. `avatar: Some("")` clears the stored avatar.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_omits_empty_bio() {
        let body = serde_json::to_string(&RegisterRequest {
            email: "a@b.com".to_string(),
            password: "secret".to_string(),
            username: "a".to_string(),
            name: "A".to_string(),
            bio: None,
        })
        .unwrap();
        assert!(!body.contains("bio"));
    }

    #[test]
    fn test_profile_update_is_partial() {
        let body = serde_json::to_string(&ProfileUpdate {
            bio: Some("hello".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(body, "{\"bio\":\"hello\"}");
    }

    #[test]
    fn test_auth_response_wire_shape() {
        let response: AuthResponse = serde_json::from_str(
            "{\"access_token\":\"t1\",\"user\":{\"id\":\"1\",\"name\":\"A\",\"username\":\"a\",\"email\":\"a@b.com\"}}",
        )
        .unwrap();
        assert_eq!(response.access_token, "t1");
        assert_eq!(response.user.id, "1");
        assert_eq!(response.user.bio, None);
    }
}
