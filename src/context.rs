//! Creator Context
//!
//! Shared handles provided via Leptos Context API to every component
//! mounted on the creator page.

use futures::channel::mpsc::UnboundedSender;
use leptos::prelude::*;

use crate::config::Markup;
use crate::creator::Intent;
use crate::models::FilterMode;

#[derive(Clone)]
pub struct CreatorContext {
    /// Queue consumed by the creator loop
    intents: UnboundedSender<Intent>,
    /// Recommendation source, read when a request is sent
    pub filter: RwSignal<FilterMode>,
    pub markup: Markup,
}

impl CreatorContext {
    pub fn new(intents: UnboundedSender<Intent>, filter: RwSignal<FilterMode>, markup: Markup) -> Self {
        Self { intents, filter, markup }
    }

    /// Queue an intent for the creator loop
    pub fn send(&self, intent: Intent) {
        if self.intents.unbounded_send(intent).is_err() {
            log::warn!("creator loop is gone, click ignored");
        }
    }
}

/// Get the creator context from the mount that provided it
pub fn use_creator_context() -> CreatorContext {
    expect_context::<CreatorContext>()
}
