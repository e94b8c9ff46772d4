// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared fixtures for tl-core tests.

use chrono::{DateTime, TimeZone, Utc};

use crate::id::{ItemId, ListId};
use crate::model::{Item, TodoList};

/// Fixed timestamp so snapshots compare by value.
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0)
        .single()
        .unwrap_or_default()
}

/// Create an incomplete item whose title matches its id.
pub fn make_item(id: &str, order: u32) -> Item {
    Item {
        id: ItemId::new(id),
        title: id.to_string(),
        description: None,
        completed: false,
        order,
        created_at: at(i64::from(order)),
    }
}

/// Create a completed item whose title matches its id.
pub fn make_done_item(id: &str, order: u32) -> Item {
    Item {
        completed: true,
        ..make_item(id, order)
    }
}

/// Create a list holding the given items.
pub fn make_list(items: Vec<Item>) -> TodoList {
    TodoList {
        id: ListId::new("list-1"),
        name: "Personal".to_string(),
        items,
        created_at: at(0),
        updated_at: at(0),
    }
}

/// Titles of the list's incomplete items in display order.
pub fn incomplete_titles(list: &TodoList) -> Vec<String> {
    list.incomplete_items()
        .into_iter()
        .map(|item| item.title.clone())
        .collect()
}

/// Titles of every item in display order.
pub fn display_titles(list: &TodoList) -> Vec<String> {
    list.display_order()
        .into_iter()
        .map(|item| item.title.clone())
        .collect()
}
