// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Entity cache for the currently displayed list.
//!
//! The free functions are pure snapshot transformations: they take a list
//! and return a new one, never touching the cache or the network. The
//! [`EntityCache`] holds the latest accepted snapshot plus the list-of-lists
//! summaries, and is replaced wholesale on every successful fetch.

use crate::id::{ItemId, ListId};
use crate::model::{Item, ItemPatch, ListSummary, TodoList};

/// Returns `list` with the named item's fields shallow-merged from `patch`.
///
/// An unknown id yields an unchanged copy.
pub fn patch_item(list: &TodoList, id: &ItemId, patch: &ItemPatch) -> TodoList {
    let mut next = list.clone();
    if let Some(item) = next.items.iter_mut().find(|item| &item.id == id) {
        patch.apply_to(item);
    }
    next
}

/// Returns `list` with `item` in place of the item sharing its id.
///
/// An unknown id yields an unchanged copy.
pub fn replace_item(list: &TodoList, item: Item) -> TodoList {
    let mut next = list.clone();
    if let Some(slot) = next.items.iter_mut().find(|slot| slot.id == item.id) {
        *slot = item;
    }
    next
}

/// Returns `list` without the named item.
pub fn remove_item(list: &TodoList, id: &ItemId) -> TodoList {
    let mut next = list.clone();
    next.items.retain(|item| &item.id != id);
    next
}

/// Returns `list` with `item` appended, or replacing an item with the same id.
pub fn insert_item(list: &TodoList, item: Item) -> TodoList {
    if list.item(&item.id).is_some() {
        return replace_item(list, item);
    }
    let mut next = list.clone();
    next.items.push(item);
    next
}

/// Returns `list` renumbered to follow `sequence`.
///
/// Items named in `sequence` get `order` equal to their position. Items the
/// sequence leaves out keep their display order and are numbered after it.
/// Unknown ids in `sequence` are ignored.
pub fn reorder_items(list: &TodoList, sequence: &[ItemId]) -> TodoList {
    let mut ordered: Vec<Item> = Vec::with_capacity(list.items.len());
    for id in sequence {
        if ordered.iter().any(|item| &item.id == id) {
            continue;
        }
        if let Some(item) = list.item(id) {
            ordered.push(item.clone());
        }
    }
    for item in list.display_order() {
        if !sequence.contains(&item.id) {
            ordered.push(item.clone());
        }
    }
    for (position, item) in ordered.iter_mut().enumerate() {
        // CORRECTNESS: list length is bounded far below u32::MAX
        #[allow(clippy::cast_possible_truncation)]
        let position = position as u32;
        item.order = position;
    }

    TodoList {
        items: ordered,
        ..list.clone()
    }
}

/// Holds the canonical snapshot of the displayed list and the summaries of
/// every list.
#[derive(Debug, Default)]
pub struct EntityCache {
    current: Option<TodoList>,
    summaries: Vec<ListSummary>,
}

impl EntityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current list wholesale and refreshes its summary.
    pub fn load(&mut self, list: TodoList) {
        self.upsert_summary(list.summary());
        self.current = Some(list);
    }

    /// The currently displayed list, if any.
    pub fn current(&self) -> Option<&TodoList> {
        self.current.as_ref()
    }

    /// Identifier of the currently displayed list, if any.
    pub fn current_id(&self) -> Option<&ListId> {
        self.current.as_ref().map(|list| &list.id)
    }

    /// Drops the current list, keeping the summaries.
    pub fn clear(&mut self) -> Option<TodoList> {
        self.current.take()
    }

    pub fn summaries(&self) -> &[ListSummary] {
        &self.summaries
    }

    /// Replaces every summary, as after a list-all fetch.
    pub fn set_summaries(&mut self, summaries: Vec<ListSummary>) {
        self.summaries = summaries;
    }

    /// Updates the summary with the same id in place, or appends it.
    pub fn upsert_summary(&mut self, summary: ListSummary) {
        match self.summaries.iter_mut().find(|s| s.id == summary.id) {
            Some(slot) => *slot = summary,
            None => self.summaries.push(summary),
        }
    }

    pub fn remove_summary(&mut self, id: &ListId) {
        self.summaries.retain(|s| &s.id != id);
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
