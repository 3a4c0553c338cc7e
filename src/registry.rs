//! Category Registry
//!
//! Which categories exist on each panel, in the order their containers were
//! discovered. Built once per page load and never changed afterwards.

use std::collections::BTreeMap;

use crate::models::{Category, Panel};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    panels: BTreeMap<Panel, Vec<Category>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a category for a panel. Returns false if it was already
    /// registered there (first registration keeps its position).
    pub fn register(&mut self, panel: Panel, category: Category) -> bool {
        let categories = self.panels.entry(panel).or_default();
        if categories.contains(&category) {
            return false;
        }
        categories.push(category);
        true
    }

    /// Categories of a panel in registration order
    pub fn categories(&self, panel: Panel) -> &[Category] {
        self.panels.get(&panel).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, panel: Panel, category: Category) -> bool {
        self.categories(panel).contains(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.panels.values().all(Vec::is_empty)
    }

    /// Every registered (panel, category) pair
    pub fn slots(&self) -> impl Iterator<Item = (Panel, Category)> + '_ {
        self.panels
            .iter()
            .flat_map(|(panel, categories)| categories.iter().map(move |c| (*panel, *c)))
    }
}
