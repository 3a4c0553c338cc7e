//! Outfit Creator Frontend
//!
//! Layered like the pages it drives:
//! - models, registry, board, sync: typed creator state and its projection
//! - api: backend bindings behind the `Backend` trait
//! - creator, lists, tasks: user workflows and their network tasks
//! - markup, store, context, components, app: the browser side

pub mod api;
pub mod board;
pub mod config;
pub mod creator;
pub mod lists;
pub mod markup;
pub mod models;
pub mod registry;
pub mod sync;
pub mod tasks;

mod app;
mod components;
mod context;
mod store;

pub use app::run;
