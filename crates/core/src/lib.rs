// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tl-core: Shared library for the tl task-list client
//!
//! This crate provides the data model and the pure, I/O-free parts of the
//! client engine: the entity cache transformations, the reorder engine and
//! the edit session manager. Network access lives in the `tasklist` crate.

pub mod cache;
pub mod edit;
pub mod error;
pub mod id;
pub mod model;
pub mod reorder;
pub mod validate;

#[cfg(test)]
mod test_helpers;

pub use cache::EntityCache;
pub use edit::{Commit, Draft, EditSession, EditSessions, EditTarget};
pub use error::{Error, Result, ValidationError};
pub use id::{ItemId, ListId};
pub use model::{Item, ItemPatch, ListSummary, NewItem, TodoList};
pub use reorder::{compute_reorder, plan_move, MovePlan};
