//! Wardrobe Endpoints
//!
//! Request body for `api/remove_wardrobe_item`.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoveWardrobeItemRequest {
    pub item_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = RemoveWardrobeItemRequest { item_id: "31".to_string() };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({ "item_id": "31" })
        );
    }
}
