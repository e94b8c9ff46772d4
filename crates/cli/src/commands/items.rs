// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use tl_core::{Item, TodoList};

use crate::cli::OutputFormat;
use crate::display::format_list;
use crate::error::{Error, Result};
use crate::sync::{Gateway, MoveOutcome, SyncController};

use super::{display_position, open_list, resolve_item, write_output};

/// `#N title  (id)`, numbered by the item's current display position.
fn describe(list: Option<&TodoList>, item: &Item) -> String {
    match list.and_then(|list| display_position(list, &item.id)) {
        Some(position) => format!("#{} {} ({})", position, item.title, item.id),
        None => format!("{} ({})", item.title, item.id),
    }
}

pub async fn add<G: Gateway, W: Write>(
    controller: &mut SyncController<G>,
    list: &str,
    title: &str,
    description: Option<&str>,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    open_list(controller, list).await?;
    let item = controller.create_item(title, description).await?;
    write_output(out, format, &item, || {
        format!("Added {}", describe(controller.current(), &item))
    })
}

/// Edit title and/or description through an item edit session.
///
/// An empty description clears it.
pub async fn edit<G: Gateway, W: Write>(
    controller: &mut SyncController<G>,
    list: &str,
    reference: &str,
    title: Option<String>,
    description: Option<String>,
    out: &mut W,
) -> Result<()> {
    if title.is_none() && description.is_none() {
        return Err(Error::NothingToEdit);
    }
    let id = resolve_item(open_list(controller, list).await?, reference)?;

    let draft = controller.begin_item_edit(&id)?;
    if let Some(title) = title {
        draft.title = title;
    }
    if let Some(description) = description {
        draft.description = description;
    }
    controller.commit_edit().await?;

    let current = controller.current();
    if let Some(item) = current.and_then(|list| list.item(&id)) {
        writeln!(out, "Updated {}", describe(current, item))?;
    }
    Ok(())
}

pub async fn set_completed<G: Gateway, W: Write>(
    controller: &mut SyncController<G>,
    list: &str,
    reference: &str,
    completed: bool,
    out: &mut W,
) -> Result<()> {
    let id = resolve_item(open_list(controller, list).await?, reference)?;
    let item = controller.set_completed(&id, completed).await?;
    let verb = if completed { "Completed" } else { "Reopened" };
    writeln!(out, "{} {}", verb, describe(controller.current(), &item))?;
    Ok(())
}

pub async fn remove<G: Gateway, W: Write>(
    controller: &mut SyncController<G>,
    list: &str,
    reference: &str,
    out: &mut W,
) -> Result<()> {
    let list = open_list(controller, list).await?;
    let id = resolve_item(list, reference)?;
    let title = list.item(&id).map(|item| item.title.clone()).unwrap_or_default();
    controller.delete_item(&id).await?;
    writeln!(out, "Removed {} ({})", title, id)?;
    Ok(())
}

/// Move an open item between 1-based positions, then print the list.
///
/// A failure to save the new order is reported as a warning; the command
/// still succeeds.
pub async fn move_item<G: Gateway, W: Write>(
    controller: &mut SyncController<G>,
    list: &str,
    from: usize,
    to: usize,
    out: &mut W,
    color: bool,
) -> Result<()> {
    if from == 0 || to == 0 {
        return Err(Error::InvalidPosition);
    }
    let open = open_list(controller, list).await?.incomplete_count();
    if let Some(&position) = [from, to].iter().find(|&&p| p > open) {
        return Err(Error::PositionOutOfRange { position, open });
    }

    if let MoveOutcome::Unpersisted(err) = controller.move_item(from - 1, to - 1).await? {
        eprintln!("warning: new order not saved: {}", err);
    }
    if let Some(list) = controller.current() {
        writeln!(out, "{}", format_list(list, color))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "items_tests.rs"]
mod tests;
