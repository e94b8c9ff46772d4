// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for lists and items.
//!
//! Every function takes a `color` flag so output is testable without a
//! terminal; callers pass [`colors::should_colorize`].

use tl_core::{Item, ListSummary, TodoList};

use crate::colors;

/// Maximum line width for wrapped descriptions (excluding indent).
const WRAP_WIDTH: usize = 72;

fn muted(text: &str, color: bool) -> String {
    if color {
        colors::muted(text)
    } else {
        text.to_string()
    }
}

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve user formatting)
/// - If content is single line >width: wrap at word boundaries
/// - If content is single line <=width: return as-is
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.chars().count() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Format the list-of-lists view.
///
/// Output format:
/// ```text
///   3  Groceries  (2 open, 5 total)
///  12  Work       (0 open, 1 total)
/// ```
pub fn format_summaries(summaries: &[ListSummary], color: bool) -> String {
    if summaries.is_empty() {
        return "No lists yet.".to_string();
    }
    let id_width = summaries
        .iter()
        .map(|s| s.id.as_str().chars().count())
        .max()
        .unwrap_or(0);
    let name_width = summaries
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or(0);

    summaries
        .iter()
        .map(|s| {
            let counts = format!("({} open, {} total)", s.incomplete, s.total);
            format!(
                "{:>id_width$}  {:<name_width$}  {}",
                s.id.as_str(),
                s.name,
                muted(&counts, color),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one item as shown by `show`, numbered by display position.
///
/// Output format:
/// ```text
///   2. [x] Buy milk  (17)
///          Two liters, the
///          usual brand.
/// ```
pub fn format_item_line(position: usize, width: usize, item: &Item, color: bool) -> Vec<String> {
    let mark = if item.completed { "[x]" } else { "[ ]" };
    let title = if item.completed {
        muted(&item.title, color)
    } else {
        item.title.clone()
    };
    let mut lines = vec![format!(
        "  {:>width$}. {} {}  {}",
        position,
        mark,
        title,
        muted(&format!("({})", item.id), color),
    )];

    if let Some(description) = &item.description {
        let indent = " ".repeat(width + 8);
        for line in wrap_text(description, WRAP_WIDTH).lines() {
            lines.push(format!("{}{}", indent, line));
        }
    }
    lines
}

/// Format a list with its items in display order.
pub fn format_list(list: &TodoList, color: bool) -> String {
    let title = format!("{}  {}", list.name, muted(&format!("({})", list.id), color));
    let mut output = vec![if color { colors::header(&title) } else { title }];

    let items = list.display_order();
    if items.is_empty() {
        output.push("  (no items)".to_string());
    }
    let width = items.len().to_string().len();
    for (index, item) in items.into_iter().enumerate() {
        output.extend(format_item_line(index + 1, width, item, color));
    }
    output.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
