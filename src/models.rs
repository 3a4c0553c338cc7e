//! Frontend Models
//!
//! Data structures shared by the creator board, markup adapter and backend
//! bindings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// One of the three UI regions on the creator page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Panel {
    Wardrobe,
    Outfit,
    Recommend,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Wardrobe, Panel::Outfit, Panel::Recommend];

    pub fn as_str(&self) -> &'static str {
        match self {
            Panel::Wardrobe => "wardrobe",
            Panel::Outfit => "outfit",
            Panel::Recommend => "recommend",
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clothing category (matches the backend's merged category labels)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Hats,
    AllBody,
    Tops,
    Bottoms,
    Shoes,
    Bags,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Hats,
        Category::AllBody,
        Category::Tops,
        Category::Bottoms,
        Category::Shoes,
        Category::Bags,
        Category::Accessories,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Hats => "hats",
            Category::AllBody => "all-body",
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Shoes => "shoes",
            Category::Bags => "bags",
            Category::Accessories => "accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category label {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Opaque item identifier. An empty string is a valid (if meaningless) id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

/// The backend sends numeric ids in JSON; markup carries them as strings.
impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => ItemId(s),
            Raw::Unsigned(n) => ItemId(n.to_string()),
            Raw::Signed(n) => ItemId(n.to_string()),
        })
    }
}

impl ItemId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId(s)
    }
}

/// Identifier assigned by the backend when an outfit is created.
/// The backend sends an integer today, so any JSON scalar is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OutfitId {
    Number(u64),
    Text(String),
}

impl fmt::Display for OutfitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutfitId::Number(n) => write!(f, "{}", n),
            OutfitId::Text(s) => f.write_str(s),
        }
    }
}

/// A wardrobe entry as displayed on the creator page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    /// Image URL
    pub path: String,
    pub category: Category,
    /// Whether the item belongs to the user's wardrobe
    pub in_wardrobe: bool,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, path: impl Into<String>, category: Category, in_wardrobe: bool) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            category,
            in_wardrobe,
        }
    }
}

/// Where recommendations are drawn from.
///
/// On the wire this is the `wardrobe` field: `true`, `false` or `"random"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Only the user's own wardrobe
    #[default]
    Wardrobe,
    /// The whole catalog
    Catalog,
    Random,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::Wardrobe, FilterMode::Catalog, FilterMode::Random];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Wardrobe => "wardrobe",
            FilterMode::Catalog => "catalog",
            FilterMode::Random => "random",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::Wardrobe => "My wardrobe",
            FilterMode::Catalog => "All items",
            FilterMode::Random => "Surprise me",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim() {
            "wardrobe" | "true" => Some(FilterMode::Wardrobe),
            "catalog" | "false" => Some(FilterMode::Catalog),
            "random" => Some(FilterMode::Random),
            _ => None,
        }
    }
}

impl Serialize for FilterMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FilterMode::Wardrobe => serializer.serialize_bool(true),
            FilterMode::Catalog => serializer.serialize_bool(false),
            FilterMode::Random => serializer.serialize_str("random"),
        }
    }
}

impl<'de> Deserialize<'de> for FilterMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Flag(true) => Ok(FilterMode::Wardrobe),
            Raw::Flag(false) => Ok(FilterMode::Catalog),
            Raw::Name(name) => FilterMode::from_name(&name)
                .ok_or_else(|| serde::de::Error::custom(format!("unknown filter mode {:?}", name))),
        }
    }
}
