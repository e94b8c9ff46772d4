// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core list and item types.
//!
//! These mirror the snapshots returned by the remote store. A list carries
//! its items; the display sequence is derived from each item's `order` and
//! is never stored separately.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{ItemId, ListId};

/// A single task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Identifier assigned by the remote store.
    pub id: ItemId,
    /// Short task text. Older stores call this field `text`.
    #[serde(alias = "text")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    /// Display sequencing key. Only relative order is meaningful.
    #[serde(default)]
    pub order: u32,
    pub created_at: DateTime<Utc>,
}

impl Item {
    fn sort_key(&self) -> (u32, DateTime<Utc>, &ItemId) {
        (self.order, self.created_at, &self.id)
    }
}

/// A named collection of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoList {
    pub id: ListId,
    pub name: String,
    #[serde(default, alias = "todos")]
    pub items: Vec<Item>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TodoList {
    /// Looks up an item by identifier.
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Incomplete items in display order.
    pub fn incomplete_items(&self) -> Vec<&Item> {
        self.section(false)
    }

    /// Completed items in display order.
    pub fn completed_items(&self) -> Vec<&Item> {
        self.section(true)
    }

    /// All items in display order: incomplete first, then completed.
    pub fn display_order(&self) -> Vec<&Item> {
        let mut items = self.incomplete_items();
        items.extend(self.completed_items());
        items
    }

    /// Number of items not yet completed.
    pub fn incomplete_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    /// Summary entry for the list-of-lists view.
    pub fn summary(&self) -> ListSummary {
        ListSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            total: self.items.len(),
            incomplete: self.incomplete_count(),
        }
    }

    fn section(&self, completed: bool) -> Vec<&Item> {
        let mut items: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| item.completed == completed)
            .collect();
        items.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        items
    }
}

/// Partial update for an item. Unset fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// `Some(None)` clears the description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl ItemPatch {
    pub fn title(title: impl Into<String>) -> Self {
        ItemPatch {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn completed(completed: bool) -> Self {
        ItemPatch {
            completed: Some(completed),
            ..Default::default()
        }
    }

    /// Returns true if the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.completed.is_none()
            && self.order.is_none()
    }

    /// Shallow-merges the set fields into `item`.
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(title) = &self.title {
            item.title = title.clone();
        }
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(completed) = self.completed {
            item.completed = completed;
        }
        if let Some(order) = self.order {
            item.order = order;
        }
    }
}

/// Request body for creating an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub completed: bool,
    pub order: u32,
}

/// One entry of the list-of-lists aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSummary {
    pub id: ListId,
    pub name: String,
    pub total: usize,
    pub incomplete: usize,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
