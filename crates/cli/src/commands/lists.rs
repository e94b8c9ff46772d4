// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::cli::OutputFormat;
use crate::display::{format_list, format_summaries};
use crate::error::Result;
use crate::sync::{Gateway, SyncController};

use super::{open_list, resolve_list, write_output};

pub async fn lists<G: Gateway, W: Write>(
    controller: &mut SyncController<G>,
    format: OutputFormat,
    out: &mut W,
    color: bool,
) -> Result<()> {
    let summaries = controller.refresh_lists().await?;
    write_output(out, format, summaries, || format_summaries(summaries, color))
}

pub async fn show<G: Gateway, W: Write>(
    controller: &mut SyncController<G>,
    reference: &str,
    format: OutputFormat,
    out: &mut W,
    color: bool,
) -> Result<()> {
    let list = open_list(controller, reference).await?;
    write_output(out, format, list, || format_list(list, color))
}

pub async fn new_list<G: Gateway, W: Write>(
    controller: &mut SyncController<G>,
    name: &str,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let list = controller.create_list(name).await?;
    write_output(out, format, &list, || {
        format!("Created list {} ({})", list.name, list.id)
    })
}

/// Rename through an edit session on the list name, so the new name goes
/// through the same validation as an interactive edit.
pub async fn rename_list<G: Gateway, W: Write>(
    controller: &mut SyncController<G>,
    reference: &str,
    name: &str,
    out: &mut W,
) -> Result<()> {
    let old = open_list(controller, reference).await?.name.clone();
    controller.begin_list_edit()?.title = name.to_string();
    controller.commit_edit().await?;

    if let Some(list) = controller.current() {
        writeln!(out, "Renamed list {} to {} ({})", old, list.name, list.id)?;
    }
    Ok(())
}

pub async fn delete_list<G: Gateway, W: Write>(
    controller: &mut SyncController<G>,
    reference: &str,
    out: &mut W,
) -> Result<()> {
    let id = resolve_list(controller, reference).await?;
    let name = controller
        .summaries()
        .iter()
        .find(|s| s.id == id)
        .map(|s| s.name.clone())
        .unwrap_or_default();
    controller.delete_list(&id).await?;
    writeln!(out, "Deleted list {} ({})", name, id)?;
    Ok(())
}

#[cfg(test)]
#[path = "lists_tests.rs"]
mod tests;
