//! Outfit and Wardrobe List Controllers
//!
//! On the listing pages every entry element carries a `data-id` and a
//! delete/remove control. Clicking the control asks the backend to drop the
//! entry; the element is removed only once the backend agrees.

use std::rc::Rc;

use futures::FutureExt;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::api::{Backend, DeleteOutfitRequest, RemoveWardrobeItemRequest};
use crate::config::Markup;
use crate::markup::elements;
use crate::tasks::{Completion, Dispatcher, TaskKind, TaskOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Outfits,
    Wardrobe,
}

impl ListKind {
    pub fn entry_selector<'a>(&self, markup: &'a Markup) -> &'a str {
        match self {
            ListKind::Outfits => &markup.outfit_entry,
            ListKind::Wardrobe => &markup.wardrobe_entry,
        }
    }

    pub fn control_class<'a>(&self, markup: &'a Markup) -> &'a str {
        match self {
            ListKind::Outfits => &markup.outfit_delete_class,
            ListKind::Wardrobe => &markup.wardrobe_remove_class,
        }
    }

    fn task_kind(&self, id: String) -> TaskKind {
        match self {
            ListKind::Outfits => TaskKind::DeleteOutfit(id),
            ListKind::Wardrobe => TaskKind::RemoveWardrobeItem(id),
        }
    }
}

/// A removable list entry
pub trait ListEntry {
    fn entry_id(&self) -> String;
    fn detach(&self);
}

impl ListEntry for Element {
    fn entry_id(&self) -> String {
        self.get_attribute("data-id").unwrap_or_default()
    }

    fn detach(&self) {
        self.remove();
    }
}

/// Ask the backend to drop the entry, then detach it on success
pub async fn remove_entry<E: ListEntry + ?Sized>(
    backend: &dyn Backend,
    kind: ListKind,
    entry: &E,
) -> TaskOutcome {
    let id = entry.entry_id();
    let result = match kind {
        ListKind::Outfits => {
            backend
                .delete_outfit(&DeleteOutfitRequest { outfit_id: id.clone() })
                .await
        }
        ListKind::Wardrobe => {
            backend
                .remove_wardrobe_item(&RemoveWardrobeItemRequest { item_id: id.clone() })
                .await
        }
    };

    if result.is_ok() {
        entry.detach();
    }
    TaskOutcome::new(kind.task_kind(id), result.map(|_| Completion::EntryRemoved))
}

/// Bind every entry of a list page. Returns how many entries were bound.
pub fn bind_list(
    document: &Document,
    kind: ListKind,
    markup: &Markup,
    backend: Rc<dyn Backend>,
    dispatcher: Dispatcher,
) -> usize {
    let entries = match document.query_selector_all(kind.entry_selector(markup)) {
        Ok(list) => elements(&list),
        Err(_) => {
            log::warn!("invalid entry selector {:?}", kind.entry_selector(markup));
            return 0;
        }
    };

    for entry in &entries {
        let element = entry.clone();
        let control_class = kind.control_class(markup).to_string();
        let backend = Rc::clone(&backend);
        let dispatcher = dispatcher.clone();

        let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
            let on_control = ev
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .is_some_and(|target| target.class_list().contains(&control_class));
            if !on_control {
                return;
            }
            let element = element.clone();
            let backend = Rc::clone(&backend);
            dispatcher.spawn(async move { remove_entry(&*backend, kind, &element).await }.boxed_local());
        });
        if entry
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not bind list entry {}", entry.entry_id());
        }
        on_click.forget();
    }

    if !entries.is_empty() {
        log::debug!("bound {} {:?} entries", entries.len(), kind);
    }
    entries.len()
}
