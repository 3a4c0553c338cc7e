//! Reactive Slot Store
//!
//! One signal per (panel, category) container. The store is the projection
//! the synchronizer renders into; components read the signals.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::board::{Board, Diff};
use crate::models::{Category, Item, ItemId, Panel};
use crate::sync::Projection;

pub struct SlotStore {
    slots: HashMap<(Panel, Category), RwSignal<Vec<Item>>>,
}

impl SlotStore {
    /// Signals for every registered slot, starting from the board's items
    pub fn from_board(board: &Board) -> Self {
        let slots = board
            .registry()
            .slots()
            .map(|(panel, category)| {
                let items = board.items(panel, category).to_vec();
                ((panel, category), RwSignal::new(items))
            })
            .collect();
        Self { slots }
    }

    pub fn slot(&self, panel: Panel, category: Category) -> Option<RwSignal<Vec<Item>>> {
        self.slots.get(&(panel, category)).copied()
    }
}

impl Projection for SlotStore {
    fn apply(&self, diff: &Diff) {
        match diff {
            Diff::Added { panel, item } => store_add_item(self, *panel, item.clone()),
            Diff::Removed { panel, category, id } => store_remove_item(self, *panel, *category, id),
        }
    }
}

// ========================
// Store Helper Functions
// ========================

/// Append an item to its slot
pub fn store_add_item(store: &SlotStore, panel: Panel, item: Item) {
    if let Some(slot) = store.slot(panel, item.category) {
        slot.update(|items| items.push(item));
    }
}

/// Remove an item from a slot by ID
pub fn store_remove_item(store: &SlotStore, panel: Panel, category: Category, id: &ItemId) {
    if let Some(slot) = store.slot(panel, category) {
        slot.update(|items| items.retain(|item| &item.id != id));
    }
}
