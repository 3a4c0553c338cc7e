//! Outfit Form Component
//!
//! Optional outfit name and the submit button.

use leptos::prelude::*;

use crate::context::use_creator_context;
use crate::creator::Intent;

#[component]
pub fn OutfitForm() -> impl IntoView {
    let ctx = use_creator_context();

    let (name, set_name) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.send(Intent::Submit { name: Some(name.get_untracked()) });
    };

    view! {
        <form class="outfit-form" on:submit=submit>
            <input
                type="text"
                id="outfit-name"
                placeholder="Outfit name (optional)"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <button type="submit" id="create-outfit">"Save outfit"</button>
        </form>
    }
}
