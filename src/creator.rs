//! Outfit Creator Workflows
//!
//! Turns user intents into board changes and backend tasks: selecting an
//! item places it in the outfit and asks for recommendations, removing takes
//! it out again, submitting posts the assembled outfit.

use std::rc::Rc;

use futures::channel::mpsc::UnboundedReceiver;
use futures::{FutureExt, StreamExt};

use crate::api::{ApiResult, Backend, CreateOutfitRequest, RecommendRequest, RecommendedItem};
use crate::models::{Category, FilterMode, Item, ItemId, Panel};
use crate::sync::ItemSynchronizer;
use crate::tasks::{Completion, Dispatcher, TaskFuture, TaskKind, TaskOutcome};

/// What a click on the creator page asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Place an item from the wardrobe or recommend panel into the outfit
    Select(Item),
    Remove { panel: Panel, category: Category, id: ItemId },
    Submit { name: Option<String> },
}

pub struct Creator {
    sync: ItemSynchronizer,
    backend: Rc<dyn Backend>,
    filter: Rc<dyn Fn() -> FilterMode>,
}

impl Creator {
    pub fn new(
        sync: ItemSynchronizer,
        backend: Rc<dyn Backend>,
        filter: impl Fn() -> FilterMode + 'static,
    ) -> Self {
        Self {
            sync,
            backend,
            filter: Rc::new(filter),
        }
    }

    pub fn synchronizer(&self) -> &ItemSynchronizer {
        &self.sync
    }

    /// Apply an intent; returns the backend task it started, if any
    pub fn handle(&self, intent: Intent) -> Option<TaskFuture> {
        match intent {
            Intent::Select(item) => self.add_to_outfit(item),
            Intent::Remove { panel, category, id } => {
                self.sync.remove_item(panel, category, &id);
                None
            }
            Intent::Submit { name } => self.submit(name.as_deref()),
        }
    }

    /// Recommendations are requested only when the item is new to the outfit
    pub fn add_to_outfit(&self, item: Item) -> Option<TaskFuture> {
        let item_id = item.id.clone();
        if !self.sync.add_item(item, Panel::Outfit) {
            return None;
        }

        let mode = (self.filter)();
        let backend = Rc::clone(&self.backend);
        let sync = self.sync.clone();
        Some(
            async move {
                let result = request_recommendations(&*backend, &sync, item_id.clone(), mode)
                    .await
                    .map(|inserted| Completion::Recommended { inserted });
                TaskOutcome::new(TaskKind::Recommend(item_id), result)
            }
            .boxed_local(),
        )
    }

    /// The payload is captured now; later board changes do not affect it.
    /// Nothing is sent for an empty outfit.
    pub fn submit(&self, name: Option<&str>) -> Option<TaskFuture> {
        let items = self.sync.outfit_item_ids();
        if items.is_empty() {
            log::debug!("outfit is empty, nothing to submit");
            return None;
        }

        let request = CreateOutfitRequest::new(items, name);
        let backend = Rc::clone(&self.backend);
        Some(
            async move {
                let result = backend
                    .create_outfit(&request)
                    .await
                    .map(|response| Completion::OutfitCreated { outfit_id: response.outfit_id });
                TaskOutcome::new(TaskKind::CreateOutfit, result)
            }
            .boxed_local(),
        )
    }
}

/// Ask the backend for items going with `item_id` and show the new ones in
/// the recommend panel. Returns how many were inserted.
pub async fn request_recommendations(
    backend: &dyn Backend,
    sync: &ItemSynchronizer,
    item_id: ItemId,
    mode: FilterMode,
) -> ApiResult<usize> {
    let request = RecommendRequest { item_id, wardrobe: mode };
    let response = backend.recommend(&request).await?;

    let mut inserted = 0;
    for result in &response.results {
        match result.to_item() {
            Some(item) => {
                if sync.add_item(item, Panel::Recommend) {
                    inserted += 1;
                }
            }
            None => skip_unknown(result),
        }
    }
    Ok(inserted)
}

fn skip_unknown(result: &RecommendedItem) {
    log::warn!(
        "recommendation {} has unknown category {:?}, skipped",
        result.id,
        result.category
    );
}

/// Apply intents in arrival order until the sender side is dropped
pub async fn run(creator: Creator, mut intents: UnboundedReceiver<Intent>, dispatcher: Dispatcher) {
    while let Some(intent) = intents.next().await {
        if let Some(task) = creator.handle(intent) {
            dispatcher.spawn(task);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::FakeBackend;
    use crate::api::{ApiError, RecommendResponse};
    use crate::board::Board;
    use crate::registry::Registry;
    use crate::sync::testing::FakeDom;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct Fixture {
        creator: Creator,
        backend: Rc<FakeBackend>,
        dom: Rc<FakeDom>,
    }

    fn fixture() -> Fixture {
        fixture_with_filter(|| FilterMode::Wardrobe)
    }

    fn fixture_with_filter(filter: impl Fn() -> FilterMode + 'static) -> Fixture {
        let mut registry = Registry::new();
        for panel in Panel::ALL {
            registry.register(panel, Category::Tops);
            registry.register(panel, Category::Bottoms);
            registry.register(panel, Category::Shoes);
        }
        let dom = Rc::new(FakeDom::default());
        let backend = Rc::new(FakeBackend::default());
        let sync = ItemSynchronizer::new(Board::new(registry), dom.clone());
        let creator = Creator::new(sync, backend.clone(), filter);
        Fixture { creator, backend, dom }
    }

    fn item(id: &str, category: Category) -> Item {
        Item::new(id, format!("/img/{}.jpg", id), category, true)
    }

    fn results(entries: &[(&str, &str)]) -> RecommendResponse {
        let body = serde_json::json!({
            "results": entries
                .iter()
                .map(|(id, category)| serde_json::json!({
                    "id": id,
                    "path": format!("/img/{}.jpg", id),
                    "category": category,
                }))
                .collect::<Vec<_>>()
        });
        serde_json::from_value(body).unwrap()
    }

    fn recommend_ids(fx: &Fixture, category: Category) -> Vec<ItemId> {
        fx.creator.synchronizer().with_board(|board| {
            board.items(Panel::Recommend, category).iter().map(|i| i.id.clone()).collect()
        })
    }

    #[test]
    fn test_genuine_add_requests_once() {
        let fx = fixture();

        let first = fx.creator.add_to_outfit(item("t1", Category::Tops));
        let second = fx.creator.add_to_outfit(item("t1", Category::Tops));
        assert!(first.is_some());
        assert!(second.is_none());

        let outcome = block_on(first.unwrap());
        assert!(outcome.is_success());

        let calls = fx.backend.recommend_calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].item_id, ItemId::from("t1"));
        assert_eq!(calls[0].wardrobe, FilterMode::Wardrobe);
    }

    #[test]
    fn test_filter_is_read_per_request() {
        let mode = Rc::new(Cell::new(FilterMode::Catalog));
        let fx = {
            let mode = Rc::clone(&mode);
            fixture_with_filter(move || mode.get())
        };

        block_on(fx.creator.add_to_outfit(item("a", Category::Tops)).unwrap());
        mode.set(FilterMode::Random);
        block_on(fx.creator.add_to_outfit(item("b", Category::Tops)).unwrap());

        let calls = fx.backend.recommend_calls.borrow();
        assert_eq!(calls[0].wardrobe, FilterMode::Catalog);
        assert_eq!(calls[1].wardrobe, FilterMode::Random);
    }

    #[test]
    fn test_recommendations_fill_recommend_panel_only() {
        let fx = fixture();
        fx.backend
            .reply_recommend("t1", Ok(results(&[("s1", "shoes"), ("b1", "bottoms"), ("s1", "shoes")])));

        let outcome = block_on(fx.creator.add_to_outfit(item("t1", Category::Tops)).unwrap());

        assert_eq!(
            outcome,
            TaskOutcome::new(
                TaskKind::Recommend(ItemId::from("t1")),
                Ok(Completion::Recommended { inserted: 2 })
            )
        );
        assert_eq!(recommend_ids(&fx, Category::Shoes), vec![ItemId::from("s1")]);
        assert_eq!(fx.dom.ids(Panel::Recommend, Category::Shoes), vec![ItemId::from("s1")]);
        assert!(fx.dom.ids(Panel::Outfit, Category::Shoes).is_empty());
        // Inserting into the recommend panel never asks for more.
        assert_eq!(fx.backend.recommend_calls.borrow().len(), 1);
    }

    #[test]
    fn test_unknown_and_unregistered_categories_are_skipped() {
        let fx = fixture();
        fx.backend
            .reply_recommend("t1", Ok(results(&[("x", "socks"), ("h", "hats"), ("s", "shoes")])));

        let outcome = block_on(fx.creator.add_to_outfit(item("t1", Category::Tops)).unwrap());

        assert_eq!(outcome.result, Ok(Completion::Recommended { inserted: 1 }));
        assert_eq!(recommend_ids(&fx, Category::Shoes), vec![ItemId::from("s")]);
    }

    #[test]
    fn test_out_of_order_responses_merge_the_same() {
        let merged = |y_first: bool| {
            let fx = fixture();
            fx.backend
                .reply_recommend("x", Ok(results(&[("s1", "shoes"), ("b1", "bottoms")])));
            fx.backend
                .reply_recommend("y", Ok(results(&[("b1", "bottoms"), ("s2", "shoes")])));

            let task_x = fx.creator.add_to_outfit(item("x", Category::Tops)).unwrap();
            let task_y = fx.creator.add_to_outfit(item("y", Category::Tops)).unwrap();
            block_on(async {
                if y_first {
                    task_y.await;
                    task_x.await;
                } else {
                    task_x.await;
                    task_y.await;
                }
            });

            let mut shoes = recommend_ids(&fx, Category::Shoes);
            shoes.sort();
            let bottoms = recommend_ids(&fx, Category::Bottoms);
            assert_eq!(fx.dom.ids(Panel::Recommend, Category::Bottoms), bottoms);
            (shoes, bottoms)
        };

        let in_order = merged(false);
        let reversed = merged(true);
        assert_eq!(in_order, reversed);
        assert_eq!(in_order.0, vec![ItemId::from("s1"), ItemId::from("s2")]);
        assert_eq!(in_order.1, vec![ItemId::from("b1")]);
    }

    #[test]
    fn test_failed_recommendation_leaves_state_untouched() {
        let fx = fixture();
        fx.backend.reply_recommend("t1", Err(ApiError::Status(500)));

        let task = fx.creator.add_to_outfit(item("t1", Category::Tops)).unwrap();
        let diffs_before = fx.dom.diff_count();
        let outcome = block_on(task);

        assert_eq!(outcome.result, Err(ApiError::Status(500)));
        assert_eq!(fx.dom.diff_count(), diffs_before);
        assert_eq!(fx.creator.synchronizer().with_board(|b| b.panel_len(Panel::Recommend)), 0);
        // The outfit keeps the item that was placed before the call.
        assert_eq!(fx.creator.synchronizer().outfit_item_ids(), vec![ItemId::from("t1")]);
    }

    #[test]
    fn test_remove_intent() {
        let fx = fixture();
        fx.creator.handle(Intent::Select(item("t1", Category::Tops)));

        let task = fx.creator.handle(Intent::Remove {
            panel: Panel::Outfit,
            category: Category::Tops,
            id: ItemId::from("t1"),
        });

        assert!(task.is_none());
        assert!(fx.creator.synchronizer().outfit_item_ids().is_empty());
        assert!(fx.dom.ids(Panel::Outfit, Category::Tops).is_empty());

        // Re-adding after removal is a genuine add again.
        assert!(fx.creator.add_to_outfit(item("t1", Category::Tops)).is_some());
    }

    #[test]
    fn test_submit_orders_by_category_then_insertion() {
        let fx = fixture();
        for (id, category) in [
            ("a", Category::Shoes),
            ("b", Category::Tops),
            ("c", Category::Bottoms),
            ("d", Category::Tops),
        ] {
            fx.creator.add_to_outfit(item(id, category));
        }

        let outcome = block_on(fx.creator.submit(Some("Weekend")).unwrap());

        assert!(outcome.is_success());
        let calls = fx.backend.create_calls.borrow();
        assert_eq!(
            serde_json::to_value(&calls[0]).unwrap(),
            serde_json::json!({ "items": ["b", "d", "c", "a"], "name": "Weekend" })
        );
    }

    #[test]
    fn test_submit_without_name_omits_field() {
        let fx = fixture();
        fx.creator.add_to_outfit(item("a", Category::Tops));

        block_on(fx.creator.handle(Intent::Submit { name: Some(String::new()) }).unwrap());

        let calls = fx.backend.create_calls.borrow();
        assert_eq!(serde_json::to_value(&calls[0]).unwrap(), serde_json::json!({ "items": ["a"] }));
    }

    #[test]
    fn test_submit_empty_outfit_is_noop() {
        let fx = fixture();
        assert!(fx.creator.submit(Some("Nothing")).is_none());
        assert!(fx.backend.create_calls.borrow().is_empty());
    }

    #[test]
    fn test_failed_submit_keeps_outfit() {
        let fx = fixture();
        fx.creator.add_to_outfit(item("a", Category::Tops));
        fx.backend.fail_create(ApiError::Status(403));
        let diffs_before = fx.dom.diff_count();

        let outcome = block_on(fx.creator.submit(None).unwrap());

        assert_eq!(outcome, TaskOutcome::new(TaskKind::CreateOutfit, Err(ApiError::Status(403))));
        assert_eq!(fx.dom.diff_count(), diffs_before);
        assert_eq!(fx.creator.synchronizer().outfit_item_ids(), vec![ItemId::from("a")]);
    }
}
