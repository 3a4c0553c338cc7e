//! Recommendation Source Picker
//!
//! Chooses where the next recommendations come from.

use leptos::prelude::*;

use crate::context::use_creator_context;
use crate::models::FilterMode;

#[component]
pub fn SourcePicker() -> impl IntoView {
    let filter = use_creator_context().filter;

    view! {
        <select
            class="recommend-source"
            prop:value=move || filter.get().as_str()
            on:change=move |ev| {
                if let Some(mode) = FilterMode::from_name(&event_target_value(&ev)) {
                    filter.set(mode);
                }
            }
        >
            {FilterMode::ALL.into_iter().map(|mode| view! {
                <option value=mode.as_str()>{mode.label()}</option>
            }).collect_view()}
        </select>
    }
}
