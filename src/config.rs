//! Page Configuration
//!
//! Settings embedded by the server as JSON in
//! `<script type="application/json" id="outfit-creator-config">`.
//! Every field is optional. The app falls back to defaults when the
//! element is missing or its JSON does not parse.

use log::LevelFilter;
use serde::Deserialize;

use crate::models::{FilterMode, Panel};

pub const CONFIG_ELEMENT_ID: &str = "outfit-creator-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Endpoint prefix, resolved against the page URL
    pub api_base: String,
    /// Where to go after an outfit is created
    pub outfits_page: String,
    /// Recommendation source when no picker is on the page
    pub filter_mode: FilterMode,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    pub log_capacity: usize,
    pub markup: Markup,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "api/".to_string(),
            outfits_page: "outfits".to_string(),
            filter_mode: FilterMode::Wardrobe,
            log_level: "info".to_string(),
            log_capacity: console_logger::DEFAULT_CAPACITY,
            markup: Markup::default(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

/// Ids, selectors and classes of the server-rendered markup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Markup {
    pub wardrobe_root: String,
    pub outfit_root: String,
    pub recommend_root: String,
    /// Category container inside a panel root, carrying `data-category`
    pub category_container: String,
    pub selectable_class: String,
    pub placed_class: String,
    pub not_in_wardrobe_class: String,
    /// Host element for the name input and submit button
    pub submit_host: String,
    /// Host element for the recommendation source picker
    pub filter_host: String,
    pub outfit_entry: String,
    pub outfit_delete_class: String,
    pub wardrobe_entry: String,
    pub wardrobe_remove_class: String,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            wardrobe_root: "wardrobe".to_string(),
            outfit_root: "outfit".to_string(),
            recommend_root: "recommend".to_string(),
            category_container: ".outfit-category".to_string(),
            selectable_class: "creator-item-sm".to_string(),
            placed_class: "creator-item-lg".to_string(),
            not_in_wardrobe_class: "not-in-wardrobe".to_string(),
            submit_host: "outfit-submit".to_string(),
            filter_host: "recommend-source".to_string(),
            outfit_entry: ".outfit".to_string(),
            outfit_delete_class: "outfit-delete".to_string(),
            wardrobe_entry: ".wardrobe-item".to_string(),
            wardrobe_remove_class: "wardrobe-remove".to_string(),
        }
    }
}

impl Markup {
    pub fn root_id(&self, panel: Panel) -> &str {
        match panel {
            Panel::Wardrobe => &self.wardrobe_root,
            Panel::Outfit => &self.outfit_root,
            Panel::Recommend => &self.recommend_root,
        }
    }

    /// Class list for a displayed item
    pub fn item_class(&self, panel: Panel, in_wardrobe: bool) -> String {
        let base = match panel {
            Panel::Outfit => &self.placed_class,
            Panel::Wardrobe | Panel::Recommend => &self.selectable_class,
        };
        if in_wardrobe {
            base.clone()
        } else {
            format!("{} {}", base, self.not_in_wardrobe_class)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_config_overrides() {
        let config = AppConfig::from_json(
            r#"{"api_base": "/v2/api", "filter_mode": "random", "markup": {"outfit_root": "board"}}"#,
        )
        .unwrap();

        assert_eq!(config.api_base, "/v2/api");
        assert_eq!(config.filter_mode, FilterMode::Random);
        assert_eq!(config.markup.root_id(Panel::Outfit), "board");
        assert_eq!(config.markup.root_id(Panel::Wardrobe), "wardrobe");
        assert_eq!(config.outfits_page, "outfits");
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        assert!(AppConfig::from_json("{not json").is_err());
        assert!(AppConfig::from_json(r#"{"filter_mode": "sometimes"}"#).is_err());
        assert!(AppConfig::from_json(r#"{"log_capacity": -1}"#).is_err());
    }

    #[test]
    fn test_log_level() {
        let mut config = AppConfig::default();
        assert_eq!(config.level_filter(), LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        config.log_level = "loud".to_string();
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn test_item_class() {
        let markup = Markup::default();
        assert_eq!(markup.item_class(Panel::Outfit, true), "creator-item-lg");
        assert_eq!(markup.item_class(Panel::Wardrobe, true), "creator-item-sm");
        assert_eq!(markup.item_class(Panel::Recommend, false), "creator-item-sm not-in-wardrobe");
    }
}
