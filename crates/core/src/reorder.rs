// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Drag-and-drop reordering.
//!
//! Moves address positions within the *incomplete* items only. Completed
//! items are never drag targets; they keep their relative order and follow
//! the incomplete items in the reconstructed sequence.
//!
//! ```text
//! incomplete [A B C D]   move 0 -> 2   =>   [B C A D]
//! completed  [X Y]                          [X Y]
//! sequence                                  [B C A D X Y]  orders 0..=5
//! ```

use crate::cache;
use crate::error::{Error, Result};
use crate::id::ItemId;
use crate::model::TodoList;

/// Removes the element at `source` and reinserts it at `dest`.
///
/// `source == dest` returns an equal sequence.
pub fn compute_reorder<T: Clone>(current: &[T], source: usize, dest: usize) -> Result<Vec<T>> {
    let len = current.len();
    for index in [source, dest] {
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }
    }

    let mut next = current.to_vec();
    if source != dest {
        let moved = next.remove(source);
        next.insert(dest, moved);
    }
    Ok(next)
}

/// The outcome of a move: what to apply locally and what to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    /// The item that was dragged.
    pub moved: ItemId,
    /// Its new 0-based position, which is also its new order value.
    pub position: u32,
    /// Full display sequence after the move.
    pub sequence: Vec<ItemId>,
}

impl MovePlan {
    /// Applies the plan to `list`, assigning gap-free order values.
    pub fn apply(&self, list: &TodoList) -> TodoList {
        cache::reorder_items(list, &self.sequence)
    }
}

/// Plans moving the incomplete item at `source` to `dest`.
///
/// Returns `None` when the move would change nothing.
pub fn plan_move(list: &TodoList, source: usize, dest: usize) -> Result<Option<MovePlan>> {
    let incomplete: Vec<ItemId> = list
        .incomplete_items()
        .into_iter()
        .map(|item| item.id.clone())
        .collect();

    let reordered = compute_reorder(&incomplete, source, dest)?;
    if source == dest {
        return Ok(None);
    }

    let moved = incomplete[source].clone();
    let mut sequence = reordered;
    sequence.extend(list.completed_items().into_iter().map(|item| item.id.clone()));

    // CORRECTNESS: dest < incomplete.len(), which is bounded far below u32::MAX
    #[allow(clippy::cast_possible_truncation)]
    let position = dest as u32;

    Ok(Some(MovePlan {
        moved,
        position,
        sequence,
    }))
}

#[cfg(test)]
#[path = "reorder_tests.rs"]
mod tests;
