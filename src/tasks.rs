//! Background Tasks
//!
//! Network calls run as independent local tasks. Each one reports a
//! [`TaskOutcome`] on a result channel; the consumer logs it and performs
//! follow-up actions such as navigation.

use std::fmt;

use futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use futures::future::LocalBoxFuture;
use futures::StreamExt;
use leptos::task::spawn_local;

use crate::api::ApiError;
use crate::models::{ItemId, OutfitId};

pub type TaskFuture = LocalBoxFuture<'static, TaskOutcome>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    Recommend(ItemId),
    CreateOutfit,
    DeleteOutfit(String),
    RemoveWardrobeItem(String),
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::Recommend(id) => write!(f, "recommend for item {}", id),
            TaskKind::CreateOutfit => f.write_str("create outfit"),
            TaskKind::DeleteOutfit(id) => write!(f, "delete outfit {}", id),
            TaskKind::RemoveWardrobeItem(id) => write!(f, "remove wardrobe item {}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Number of results that were new to the recommend panel
    Recommended { inserted: usize },
    OutfitCreated { outfit_id: Option<OutfitId> },
    EntryRemoved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOutcome {
    pub kind: TaskKind,
    pub result: Result<Completion, ApiError>,
}

impl TaskOutcome {
    pub fn new(kind: TaskKind, result: Result<Completion, ApiError>) -> Self {
        Self { kind, result }
    }

    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Spawns tasks and forwards their outcomes to one receiver
#[derive(Clone)]
pub struct Dispatcher {
    outcomes: UnboundedSender<TaskOutcome>,
}

impl Dispatcher {
    pub fn channel() -> (Self, UnboundedReceiver<TaskOutcome>) {
        let (outcomes, receiver) = mpsc::unbounded();
        (Self { outcomes }, receiver)
    }

    pub fn spawn(&self, task: TaskFuture) {
        let outcomes = self.outcomes.clone();
        spawn_local(async move {
            let outcome = task.await;
            if outcomes.unbounded_send(outcome).is_err() {
                log::warn!("task outcome dropped, receiver is gone");
            }
        });
    }
}

pub fn log_outcome(outcome: &TaskOutcome) {
    match &outcome.result {
        Ok(Completion::Recommended { inserted }) => {
            log::info!("{}: {} new recommendation(s)", outcome.kind, inserted);
        }
        Ok(Completion::OutfitCreated { outfit_id: Some(id) }) => {
            log::info!("{}: created outfit {}", outcome.kind, id);
        }
        Ok(_) => log::info!("{}: done", outcome.kind),
        Err(error) => log::warn!("{} failed: {}", outcome.kind, error),
    }
}

/// Consume outcomes until every dispatcher is dropped
pub async fn drain_outcomes(
    mut outcomes: UnboundedReceiver<TaskOutcome>,
    mut on_outcome: impl FnMut(&TaskOutcome),
) {
    while let Some(outcome) = outcomes.next().await {
        log_outcome(&outcome);
        on_outcome(&outcome);
    }
}
