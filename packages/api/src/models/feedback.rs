use serde::{Deserialize, Serialize};

/// One anonymous feedback entry. `created_at` is the server's timestamp
/// string, passed through for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackItem {
    pub id: String,
    pub content: String,
    pub created_at: String,
    pub is_public: bool,
}

/// Body of `POST /feedback/:username`. Content length bounds (10..=1000)
/// are enforced client-side before the request is built.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackPayload {
    pub content: String,
    pub is_public: bool,
}

/// Body of `PATCH /feedback/:id`.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
}

/// A page of a server-owned collection. The pagination echo fields are
/// optional; only `data` is guaranteed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Paged<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Response of `GET /feedback/stats`. Fields default to zero when the server
/// omits them.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FeedbackStats {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub public: u64,
    #[serde(default)]
    pub private: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_item_wire_shape() {
        let item: FeedbackItem = serde_json::from_str(
            "{\"id\":\"f1\",\"content\":\"well done\",\"createdAt\":\"2024-05-01T10:00:00.000Z\",\"isPublic\":true}",
        )
        .unwrap();
        assert_eq!(item.created_at, "2024-05-01T10:00:00.000Z");
        assert!(item.is_public);
    }

    #[test]
    fn test_payload_wire_shape() {
        let body = serde_json::to_string(&FeedbackPayload {
            content: "0123456789".to_string(),
            is_public: true,
        })
        .unwrap();
        assert_eq!(body, "{\"content\":\"0123456789\",\"isPublic\":true}");
    }

    #[test]
    fn test_paged_without_echo_fields() {
        let page: Paged<FeedbackItem> = serde_json::from_str("{\"data\":[]}").unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.page, None);
        assert_eq!(page.total, None);
    }

    #[test]
    fn test_paged_with_echo_fields() {
        let page: Paged<FeedbackItem> =
            serde_json::from_str("{\"data\":[],\"page\":2,\"limit\":10,\"total\":37}").unwrap();
        assert_eq!(page.page, Some(2));
        assert_eq!(page.limit, Some(10));
        assert_eq!(page.total, Some(37));
    }
}
