//! Creator Board State
//!
//! Per (panel, category) ordered item collections. Transitions are pure:
//! they mutate the collections and describe the change as a [`Diff`] for
//! the projection layer to render.

use std::collections::HashMap;

use crate::models::{Category, Item, ItemId, Panel};
use crate::registry::Registry;

/// Ordered items of one (panel, category) pair, unique by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryItemSet {
    items: Vec<Item>,
}

impl CategoryItemSet {
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    /// Append unless the id is already present
    pub fn insert(&mut self, item: Item) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn remove(&mut self, id: &ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| &item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn ids(&self) -> impl Iterator<Item = &ItemId> {
        self.items.iter().map(|item| &item.id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single change to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diff {
    Added { panel: Panel, item: Item },
    Removed { panel: Panel, category: Category, id: ItemId },
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    registry: Registry,
    sets: HashMap<(Panel, Category), CategoryItemSet>,
}

impl Board {
    /// Empty collections for every registered slot
    pub fn new(registry: Registry) -> Self {
        let sets = registry
            .slots()
            .map(|slot| (slot, CategoryItemSet::default()))
            .collect();
        Self { registry, sets }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Add an item to a panel. `None` if the id is already there or the
    /// item's category has no container on that panel.
    pub fn add_item(&mut self, panel: Panel, item: Item) -> Option<Diff> {
        let set = self.sets.get_mut(&(panel, item.category))?;
        if !set.insert(item.clone()) {
            return None;
        }
        Some(Diff::Added { panel, item })
    }

    /// Remove an item from a panel. `None` if it was not there.
    pub fn remove_item(&mut self, panel: Panel, category: Category, id: &ItemId) -> Option<Diff> {
        let set = self.sets.get_mut(&(panel, category))?;
        let removed = set.remove(id)?;
        Some(Diff::Removed { panel, category, id: removed.id })
    }

    pub fn contains(&self, panel: Panel, category: Category, id: &ItemId) -> bool {
        self.sets
            .get(&(panel, category))
            .is_some_and(|set| set.contains(id))
    }

    pub fn items(&self, panel: Panel, category: Category) -> &[Item] {
        self.sets
            .get(&(panel, category))
            .map(CategoryItemSet::items)
            .unwrap_or(&[])
    }

    /// Outfit ids in category registration order, then insertion order
    pub fn outfit_item_ids(&self) -> Vec<ItemId> {
        self.registry
            .categories(Panel::Outfit)
            .iter()
            .filter_map(|category| self.sets.get(&(Panel::Outfit, *category)))
            .flat_map(|set| set.ids().cloned())
            .collect()
    }

    pub fn panel_len(&self, panel: Panel) -> usize {
        self.registry
            .categories(panel)
            .iter()
            .filter_map(|category| self.sets.get(&(panel, *category)))
            .map(CategoryItemSet::len)
            .sum()
    }
}
