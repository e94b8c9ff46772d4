// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::{TimeZone, Utc};
use tl_core::{ItemId, ListId};
use yare::parameterized;

fn item(id: &str, title: &str, completed: bool, order: u32) -> Item {
    Item {
        id: ItemId::new(id),
        title: title.to_string(),
        description: None,
        completed,
        order,
        created_at: Utc.timestamp_opt(1_700_000_000, 0).single().unwrap(),
    }
}

fn list(items: Vec<Item>) -> TodoList {
    let now = Utc.timestamp_opt(1_700_000_000, 0).single().unwrap();
    TodoList {
        id: ListId::new("7"),
        name: "Groceries".to_string(),
        items,
        created_at: now,
        updated_at: now,
    }
}

fn summary(id: &str, name: &str, incomplete: usize, total: usize) -> ListSummary {
    ListSummary {
        id: ListId::new(id),
        name: name.to_string(),
        total,
        incomplete,
    }
}

#[parameterized(
    short_unchanged = { "short text", 20, "short text" },
    wraps_at_word = { "one two three four", 9, "one two\nthree\nfour" },
    keeps_newlines = { "line one\nline two is long", 5, "line one\nline two is long" },
    long_word_alone = { "a verylongword b", 4, "a\nverylongword\nb" },
)]
fn test_wrap_text(content: &str, width: usize, expected: &str) {
    assert_eq!(wrap_text(content, width), expected);
}

#[test]
fn test_format_summaries_aligns_columns() {
    let text = format_summaries(
        &[summary("3", "Groceries", 2, 5), summary("12", "Work", 0, 1)],
        false,
    );
    assert_eq!(
        text,
        " 3  Groceries  (2 open, 5 total)\n12  Work       (0 open, 1 total)"
    );
}

#[test]
fn test_format_summaries_empty() {
    assert_eq!(format_summaries(&[], false), "No lists yet.");
}

#[test]
fn test_format_list_orders_open_items_first() {
    let text = format_list(
        &list(vec![
            item("a", "Milk", true, 0),
            item("b", "Eggs", false, 2),
            item("c", "Bread", false, 1),
        ]),
        false,
    );
    assert_eq!(
        text,
        "Groceries  (7)\n  1. [ ] Bread  (c)\n  2. [ ] Eggs  (b)\n  3. [x] Milk  (a)"
    );
}

#[test]
fn test_format_list_empty() {
    assert_eq!(
        format_list(&list(vec![]), false),
        "Groceries  (7)\n  (no items)"
    );
}

#[test]
fn test_format_item_line_indents_description() {
    let mut milk = item("17", "Buy milk", false, 0);
    milk.description = Some("Two liters".to_string());

    let lines = format_item_line(10, 2, &milk, false);
    assert_eq!(lines[0], "  10. [ ] Buy milk  (17)");
    assert_eq!(lines[1], "          Two liters");
}

#[test]
fn test_format_item_line_with_color_mutes_completed() {
    let done = item("1", "Done thing", true, 0);
    let lines = format_item_line(1, 1, &done, true);
    assert!(lines[0].contains(&colors::muted("Done thing")));
}
