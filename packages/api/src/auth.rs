//! Auth endpoints: obtain a bearer token and the initial profile.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest};

impl ApiClient {
    /// `POST /auth/login`. Any non-2xx is surfaced as [`ApiError::Status`];
    /// the caller shows a generic failure message unless the server supplied
    /// one.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.send(self.post("/auth/login").json(request)).await
    }

    /// `POST /users`. Registration doubles as the first login: the response
    /// carries a token.
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.send(self.post("/users").json(request)).await
    }
}
