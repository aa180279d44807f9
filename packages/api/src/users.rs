//! User endpoints: the caller's own profile and public profile lookup.

use store::UserProfile;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::ProfileUpdate;

impl ApiClient {
    /// `GET /users/me`.
    pub async fn get_me(&self) -> Result<UserProfile, ApiError> {
        self.send(self.get("/users/me")).await
    }

    /// `PATCH /users/me`. Only the fields present in `update` are sent.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        self.send(self.patch("/users/me").json(update)).await
    }

    /// `GET /users/profile/:username`. Callers treat any failure here as
    /// "profile not found".
    pub async fn get_public_profile(&self, username: &str) -> Result<UserProfile, ApiError> {
        self.send(self.get(&format!("/users/profile/{username}")))
            .await
    }
}
