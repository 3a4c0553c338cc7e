//! Item Image Component
//!
//! A single displayed item. Clicking it places it in the outfit, or takes
//! it out again when it is already there.

use leptos::prelude::*;

use crate::context::use_creator_context;
use crate::creator::Intent;
use crate::models::{Item, Panel};

#[component]
pub fn ItemImage(item: Item, panel: Panel) -> impl IntoView {
    let ctx = use_creator_context();
    let class = ctx.markup.item_class(panel, item.in_wardrobe);

    let intent = match panel {
        Panel::Outfit => Intent::Remove {
            panel,
            category: item.category,
            id: item.id.clone(),
        },
        Panel::Wardrobe | Panel::Recommend => Intent::Select(item.clone()),
    };

    view! {
        <img
            class=class
            src=item.path.clone()
            data-id=item.id.to_string()
            data-category=item.category.as_str()
            on:click=move |_| ctx.send(intent.clone())
        />
    }
}
