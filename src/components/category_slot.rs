//! Category Slot Component
//!
//! Renders the items of one (panel, category) container.

use leptos::prelude::*;

use crate::components::ItemImage;
use crate::models::{Item, Panel};

#[component]
pub fn CategorySlot(panel: Panel, items: RwSignal<Vec<Item>>) -> impl IntoView {
    view! {
        <For
            each=move || items.get()
            key=|item| item.id.clone()
            children=move |item| view! { <ItemImage item=item panel=panel /> }
        />
    }
}
