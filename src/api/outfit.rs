//! Outfit Endpoints
//!
//! Request and response bodies for `api/create_outfit` and
//! `api/delete_outfit`.

use serde::{Deserialize, Serialize};

use crate::models::{ItemId, OutfitId};

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateOutfitRequest {
    pub items: Vec<ItemId>,
    /// Omitted entirely when unset; the server picks a default name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl CreateOutfitRequest {
    /// Blank names are dropped
    pub fn new(items: Vec<ItemId>, name: Option<&str>) -> Self {
        let name = name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        Self { items, name }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteOutfitRequest {
    pub outfit_id: String,
}

// ========================
// Responses
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct CreateOutfitResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub outfit_id: Option<OutfitId>,
    #[serde(default)]
    pub item_ids: Vec<ItemId>,
}

impl CreateOutfitResponse {
    /// Any body is accepted; unreadable ones decode to the default
    pub fn parse_lenient(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}
