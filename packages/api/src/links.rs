//! Link endpoints: the owner's collection and the public listing.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{LinkItem, LinkPayload, ReorderRequest};

impl ApiClient {
    /// `GET /links` — the authenticated user's links, in server order.
    pub async fn get_my_links(&self) -> Result<Vec<LinkItem>, ApiError> {
        self.send(self.get("/links")).await
    }

    /// `POST /links`.
    pub async fn create_link(&self, payload: &LinkPayload) -> Result<LinkItem, ApiError> {
        self.send(self.post("/links").json(payload)).await
    }

    /// `PATCH /links/:id`.
    pub async fn update_link(&self, id: &str, payload: &LinkPayload) -> Result<LinkItem, ApiError> {
        self.send(self.patch(&format!("/links/{id}")).json(payload))
            .await
    }

    /// `DELETE /links/:id`.
    pub async fn delete_link(&self, id: &str) -> Result<(), ApiError> {
        self.send_unit(self.delete(&format!("/links/{id}"))).await
    }

    /// `PUT /links/reorder`. Part of the fixed contract; no view invokes it
    /// yet.
    pub async fn reorder_links(&self, link_ids: Vec<String>) -> Result<(), ApiError> {
        self.send_unit(self.put("/links/reorder").json(&ReorderRequest { link_ids }))
            .await
    }

    /// `GET /links/public/:username`.
    pub async fn get_public_links(&self, username: &str) -> Result<Vec<LinkItem>, ApiError> {
        self.send(self.get(&format!("/links/public/{username}")))
            .await
    }
}
