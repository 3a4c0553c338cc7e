//! Recommendation Endpoint
//!
//! Request and response bodies for `api/recommend`.

use serde::{Deserialize, Serialize};

use crate::models::{Category, FilterMode, Item, ItemId};

// ========================
// Request
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendRequest {
    pub item_id: ItemId,
    /// Serialized as `true`, `false` or `"random"`
    pub wardrobe: FilterMode,
}

// ========================
// Response
// ========================

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub results: Vec<RecommendedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RecommendedItem {
    pub id: ItemId,
    pub path: String,
    /// Kept raw so one unknown label does not reject the whole response
    pub category: String,
    #[serde(default)]
    pub in_wardrobe: bool,
}

impl RecommendedItem {
    /// `None` when the category label is not one we display
    pub fn to_item(&self) -> Option<Item> {
        let category = self.category.parse::<Category>().ok()?;
        Some(Item::new(self.id.clone(), self.path.clone(), category, self.in_wardrobe))
    }
}
