//! Item Synchronizer
//!
//! Applies board transitions and hands each resulting diff to a projection,
//! so the collections and the displayed elements change together.

use std::cell::RefCell;
use std::rc::Rc;

use crate::board::{Board, Diff};
use crate::models::{Category, Item, ItemId, Panel};

/// Renders board changes (reactive signals in the app, fakes in tests)
pub trait Projection {
    fn apply(&self, diff: &Diff);
}

pub struct ItemSynchronizer {
    board: Rc<RefCell<Board>>,
    projection: Rc<dyn Projection>,
}

impl Clone for ItemSynchronizer {
    fn clone(&self) -> Self {
        Self {
            board: Rc::clone(&self.board),
            projection: Rc::clone(&self.projection),
        }
    }
}

impl ItemSynchronizer {
    pub fn new(board: Board, projection: Rc<dyn Projection>) -> Self {
        Self {
            board: Rc::new(RefCell::new(board)),
            projection,
        }
    }

    /// True only when the item was newly added
    pub fn add_item(&self, item: Item, panel: Panel) -> bool {
        let id = item.id.clone();
        let category = item.category;
        // Borrow ends before projecting so renderers may read the board.
        let diff = self.board.borrow_mut().add_item(panel, item);
        match diff {
            Some(diff) => {
                self.projection.apply(&diff);
                true
            }
            None => {
                if self.board.borrow().registry().contains(panel, category) {
                    log::debug!("{} already shows {} in {}", panel, id, category);
                } else {
                    log::warn!("{} has no {} container, dropping item {}", panel, category, id);
                }
                false
            }
        }
    }

    pub fn remove_item(&self, panel: Panel, category: Category, id: &ItemId) -> bool {
        let diff = self.board.borrow_mut().remove_item(panel, category, id);
        match diff {
            Some(diff) => {
                self.projection.apply(&diff);
                true
            }
            None => false,
        }
    }

    pub fn outfit_item_ids(&self) -> Vec<ItemId> {
        self.board.borrow().outfit_item_ids()
    }

    /// Read access to the board for rendering and assertions
    pub fn with_board<T>(&self, f: impl FnOnce(&Board) -> T) -> T {
        f(&self.board.borrow())
    }
}
