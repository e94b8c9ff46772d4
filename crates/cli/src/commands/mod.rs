// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command handlers.
//!
//! Each handler drives a [`SyncController`] and writes its report to `out`,
//! so tests can run them against an in-memory gateway and a byte buffer.

pub mod items;
pub mod lists;

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;
use serde::Serialize;
use tracing::debug;

use tl_core::{ItemId, ListId, TodoList};

use crate::cli::{Cli, Command, OutputFormat};
use crate::error::{Error, Result};
use crate::sync::{Gateway, SyncController};

/// Run one parsed command.
pub async fn run<G: Gateway, W: Write>(
    controller: &mut SyncController<G>,
    command: Command,
    out: &mut W,
    color: bool,
) -> Result<()> {
    match command {
        Command::Lists { output } => lists::lists(controller, output, out, color).await,
        Command::Show { list, output } => lists::show(controller, &list, output, out, color).await,
        Command::NewList { name, output } => lists::new_list(controller, &name, output, out).await,
        Command::RenameList { list, name } => {
            lists::rename_list(controller, &list, &name, out).await
        }
        Command::DeleteList { list } => lists::delete_list(controller, &list, out).await,
        Command::Add {
            list,
            title,
            description,
            output,
        } => items::add(controller, &list, &title, description.as_deref(), output, out).await,
        Command::Edit {
            list,
            item,
            title,
            description,
        } => items::edit(controller, &list, &item, title, description, out).await,
        Command::Done { list, item } => items::set_completed(controller, &list, &item, true, out).await,
        Command::Undo { list, item } => {
            items::set_completed(controller, &list, &item, false, out).await
        }
        Command::Rm { list, item } => items::remove(controller, &list, &item, out).await,
        Command::Move { list, from, to } => {
            items::move_item(controller, &list, from, to, out, color).await
        }
        Command::Completion { shell } => completion(shell, out),
    }
}

/// Write a completion script for `shell`.
pub fn completion<W: Write>(shell: Shell, out: &mut W) -> Result<()> {
    clap_complete::generate(shell, &mut Cli::command(), "tl", out);
    Ok(())
}

/// Resolve a list reference (id or name) against fresh summaries.
///
/// An exact id wins; otherwise names match case-insensitively and must be
/// unique.
pub(crate) async fn resolve_list<G: Gateway>(
    controller: &mut SyncController<G>,
    reference: &str,
) -> Result<ListId> {
    let reference = reference.trim();
    let summaries = controller.refresh_lists().await?;

    if let Some(summary) = summaries.iter().find(|s| s.id.as_str() == reference) {
        return Ok(summary.id.clone());
    }

    let wanted = reference.to_lowercase();
    let matches: Vec<&ListId> = summaries
        .iter()
        .filter(|s| s.name.trim().to_lowercase() == wanted)
        .map(|s| &s.id)
        .collect();
    match matches.as_slice() {
        [id] => Ok((*id).clone()),
        [] => Err(Error::ListNotFound(reference.to_string())),
        ids => Err(Error::AmbiguousList {
            name: reference.to_string(),
            ids: ids.iter().map(|id| id.to_string()).collect(),
        }),
    }
}

/// Resolve and open a list, returning its snapshot.
pub(crate) async fn open_list<'c, G: Gateway>(
    controller: &'c mut SyncController<G>,
    reference: &str,
) -> Result<&'c TodoList> {
    let id = resolve_list(controller, reference).await?;
    let outcome = controller.open_list(&id).await?;
    debug!(list = %id, ?outcome, "opened list");
    controller
        .current()
        .ok_or_else(|| Error::ListNotFound(reference.to_string()))
}

/// Resolve an item reference within `list`.
///
/// `#N` is the Nth item in display order; anything else is an item id.
pub(crate) fn resolve_item(list: &TodoList, reference: &str) -> Result<ItemId> {
    let reference = reference.trim();
    if let Some(position) = reference.strip_prefix('#') {
        let index = position
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .ok_or_else(|| Error::ItemNotFound(reference.to_string()))?;
        return list
            .display_order()
            .get(index)
            .map(|item| item.id.clone())
            .ok_or_else(|| Error::ItemNotFound(reference.to_string()));
    }

    let id = ItemId::new(reference);
    match list.item(&id) {
        Some(_) => Ok(id),
        None => Err(Error::ItemNotFound(reference.to_string())),
    }
}

/// 1-based display position of an item.
pub(crate) fn display_position(list: &TodoList, id: &ItemId) -> Option<usize> {
    list.display_order()
        .iter()
        .position(|item| &item.id == id)
        .map(|index| index + 1)
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Write either the text rendering or the JSON form.
pub(crate) fn write_output<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    format: OutputFormat,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", text())?;
            Ok(())
        }
        OutputFormat::Json => write_json(out, value),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
