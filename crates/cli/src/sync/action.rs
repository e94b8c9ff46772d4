// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-action state machine.
//!
//! ```text
//! Idle ──begin──► InFlight ──settle──► Applied ──► Idle
//!                          └─────────► Failed  ──► Idle
//! ```
//!
//! A front end disables the affordance for an action while it is
//! `InFlight`. Settled states are reported once and then drop back to
//! `Idle`. The same action may be begun more than once (overlapping loads
//! of one list); it stays `InFlight` until every start has settled.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tl_core::{ItemId, ListId};

/// A mutating (or loading) user action and the entity it targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Action {
    RefreshLists,
    LoadList(ListId),
    CreateList,
    RenameList(ListId),
    DeleteList(ListId),
    CreateItem(ListId),
    UpdateItem(ItemId),
    DeleteItem(ItemId),
    MoveItem(ItemId),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::RefreshLists => write!(f, "refresh lists"),
            Action::LoadList(id) => write!(f, "load list {}", id),
            Action::CreateList => write!(f, "create list"),
            Action::RenameList(id) => write!(f, "rename list {}", id),
            Action::DeleteList(id) => write!(f, "delete list {}", id),
            Action::CreateItem(id) => write!(f, "add item to list {}", id),
            Action::UpdateItem(id) => write!(f, "update item {}", id),
            Action::DeleteItem(id) => write!(f, "delete item {}", id),
            Action::MoveItem(id) => write!(f, "move item {}", id),
        }
    }
}

/// Where an action is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionState {
    Idle,
    InFlight,
    Applied,
    Failed,
}

/// Tracks which actions are in flight, counting overlapping starts.
#[derive(Debug, Default)]
pub struct ActionTracker {
    in_flight: HashMap<Action, usize>,
}

impl ActionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `action` in flight.
    pub fn begin(&mut self, action: &Action) -> ActionState {
        *self.in_flight.entry(action.clone()).or_insert(0) += 1;
        ActionState::InFlight
    }

    /// Settles one start of `action` as applied or failed.
    ///
    /// The action returns to idle once its last outstanding start settles.
    pub fn settle(&mut self, action: &Action, ok: bool) -> ActionState {
        if let Some(count) = self.in_flight.get_mut(action) {
            *count -= 1;
            if *count == 0 {
                self.in_flight.remove(action);
            }
        }
        if ok {
            ActionState::Applied
        } else {
            ActionState::Failed
        }
    }

    /// Current state of `action`: `InFlight` or `Idle`.
    pub fn state(&self, action: &Action) -> ActionState {
        if self.in_flight.contains_key(action) {
            ActionState::InFlight
        } else {
            ActionState::Idle
        }
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
