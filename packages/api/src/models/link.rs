use serde::{Deserialize, Serialize};

/// A single curated link, in server response order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkItem {
    pub id: String,
    pub title: String,
    pub url: String,
}

/// Body of `POST /links` and `PATCH /links/:id`.
#[derive(Clone, Debug, Serialize)]
pub struct LinkPayload {
    pub title: String,
    pub url: String,
}

/// Body of `PUT /links/reorder`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    pub link_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reorder_wire_shape() {
        let body = serde_json::to_string(&ReorderRequest {
            link_ids: vec!["a".to_string(), "b".to_string()],
        })
        .unwrap();
        assert_eq!(body, "{\"linkIds\":[\"a\",\"b\"]}");
    }
}
