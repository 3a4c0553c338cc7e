//! Outfit Creator Frontend App
//!
//! Wires the page: config and logging first, then the creator panels and
//! the list controllers. Each part stays inactive when its markup is absent.

use std::rc::Rc;

use futures::channel::mpsc;
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::api::{self, ApiError, Backend, HttpBackend};
use crate::board::Board;
use crate::components::{CategorySlot, OutfitForm, SourcePicker};
use crate::config::AppConfig;
use crate::context::CreatorContext;
use crate::creator::{self, Creator};
use crate::lists::{self, ListKind};
use crate::markup;
use crate::store::SlotStore;
use crate::sync::ItemSynchronizer;
use crate::tasks::{self, Completion, Dispatcher};

pub fn run() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let parsed = markup::config_json(&document).map(|json| AppConfig::from_json(&json));
    let config = match &parsed {
        Some(Ok(config)) => config.clone(),
        _ => AppConfig::default(),
    };
    if console_logger::init(config.level_filter(), config.log_capacity).is_err() {
        web_sys::console::warn_1(&"[APP] logger already installed".into());
    }
    if let Some(Err(e)) = &parsed {
        log::warn!("ignoring invalid page config: {}", e);
    }

    let backend: Rc<dyn Backend> = match page_backend(&config) {
        Ok(backend) => Rc::new(backend),
        Err(e) => {
            log::error!("cannot reach the outfit API: {}", e);
            return;
        }
    };

    let (dispatcher, outcomes) = Dispatcher::channel();
    let outfits_page = config.outfits_page.clone();
    spawn_local(tasks::drain_outcomes(outcomes, move |outcome| {
        if let Ok(Completion::OutfitCreated { .. }) = &outcome.result {
            navigate(&outfits_page);
        }
    }));

    mount_creator(&document, &config, Rc::clone(&backend), dispatcher.clone());
    lists::bind_list(&document, ListKind::Outfits, &config.markup, Rc::clone(&backend), dispatcher.clone());
    lists::bind_list(&document, ListKind::Wardrobe, &config.markup, backend, dispatcher);
}

fn page_backend(config: &AppConfig) -> Result<HttpBackend, ApiError> {
    let href = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .ok_or_else(|| ApiError::Url("page location unavailable".to_string()))?;
    Ok(HttpBackend::new(api::resolve_base(&href, &config.api_base)?))
}

fn navigate(target: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if window.location().set_href(target).is_err() {
        log::warn!("navigation to {} failed", target);
    }
}

/// Mount the creator panels. Returns false when the page has no creator.
fn mount_creator(document: &Document, config: &AppConfig, backend: Rc<dyn Backend>, dispatcher: Dispatcher) -> bool {
    let discovery = markup::discover(document, &config.markup);
    if discovery.registry.is_empty() {
        return false;
    }

    let mut board = Board::new(discovery.registry.clone());
    for container in &discovery.containers {
        for item in &container.seed {
            board.add_item(container.panel, item.clone());
        }
    }

    let store = Rc::new(SlotStore::from_board(&board));
    let filter = RwSignal::new(config.filter_mode);
    let (intents, intent_queue) = mpsc::unbounded();
    let ctx = CreatorContext::new(intents, filter, config.markup.clone());

    for container in discovery.containers {
        let Some(items) = store.slot(container.panel, container.category) else {
            continue;
        };
        let panel = container.panel;
        let ctx = ctx.clone();
        container.element.set_inner_html("");
        mount_to(container.element, move || {
            provide_context(ctx);
            view! { <CategorySlot panel=panel items=items /> }
        })
        .forget();
    }

    mount_host(document, &config.markup.submit_host, ctx.clone(), || view! { <OutfitForm /> });
    mount_host(document, &config.markup.filter_host, ctx, || view! { <SourcePicker /> });

    let sync = ItemSynchronizer::new(board, store);
    let creator = Creator::new(sync, backend, move || filter.get_untracked());
    spawn_local(creator::run(creator, intent_queue, dispatcher));
    log::info!("outfit creator ready");
    true
}

fn mount_host<F, N>(document: &Document, id: &str, ctx: CreatorContext, view: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView + 'static,
{
    let Some(host) = document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    mount_to(host, move || {
        provide_context(ctx);
        view()
    })
    .forget();
}
