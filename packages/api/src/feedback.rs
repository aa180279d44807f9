//! Feedback endpoints: the owner's inbox and the public submission flow.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{FeedbackItem, FeedbackPayload, FeedbackStats, FeedbackUpdate, Paged};

impl ApiClient {
    /// `GET /feedback?page&limit` — the authenticated user's received
    /// feedback, newest first.
    pub async fn get_my_feedbacks(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Paged<FeedbackItem>, ApiError> {
        self.send(self.get("/feedback").query(&[("page", page), ("limit", limit)]))
            .await
    }

    /// `POST /feedback/:username` — leave anonymous feedback on a public
    /// profile. Content bounds are validated by the form layer before this
    /// is ever called.
    pub async fn create_feedback(
        &self,
        username: &str,
        payload: &FeedbackPayload,
    ) -> Result<FeedbackItem, ApiError> {
        self.send(self.post(&format!("/feedback/{username}")).json(payload))
            .await
    }

    /// `PATCH /feedback/:id`.
    pub async fn update_feedback(
        &self,
        id: &str,
        update: &FeedbackUpdate,
    ) -> Result<FeedbackItem, ApiError> {
        self.send(self.patch(&format!("/feedback/{id}")).json(update))
            .await
    }

    /// `DELETE /feedback/:id`.
    pub async fn delete_feedback(&self, id: &str) -> Result<(), ApiError> {
        self.send_unit(self.delete(&format!("/feedback/{id}")))
            .await
    }

    /// `GET /feedback/stats`.
    pub async fn get_stats(&self) -> Result<FeedbackStats, ApiError> {
        self.send(self.get("/feedback/stats")).await
    }

    /// `GET /feedback/public/:username?page&limit`.
    pub async fn get_public_feedbacks(
        &self,
        username: &str,
        page: u32,
        limit: u32,
    ) -> Result<Paged<FeedbackItem>, ApiError> {
        self.send(
            self.get(&format!("/feedback/public/{username}"))
                .query(&[("page", page), ("limit", limit)]),
        )
        .await
    }
}
