// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::colors;
use crate::help;

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Parse a 1-based position.
fn position(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("positions start at 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("'{}' is not a position", s)),
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "tl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Task lists synced with a remote list service")]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Config file (default: <config dir>/tasklist/config.toml)
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Lists
    // ─────────────────────────────────────────────────────────────────────────
    /// Show all lists with open/total counts
    Lists {
        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Show a list's items in display order
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  tl show 7                 Show list 7
  tl show Groceries         Show the list named Groceries
  tl show 7 -o json         Print the list snapshot as JSON")
    )]
    Show {
        /// List id or name
        list: String,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Create a list
    #[command(name = "new-list", arg_required_else_help = true)]
    NewList {
        /// Name of the new list
        #[arg(value_parser = non_empty_string)]
        name: String,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Rename a list
    #[command(name = "rename-list", arg_required_else_help = true)]
    RenameList {
        /// List id or name
        list: String,

        /// New name
        #[arg(value_parser = non_empty_string)]
        name: String,
    },

    /// Delete a list and its items
    #[command(name = "delete-list", arg_required_else_help = true)]
    DeleteList {
        /// List id or name
        list: String,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Items
    // ─────────────────────────────────────────────────────────────────────────
    /// Add an item to a list
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  tl add 7 \"Buy milk\"              Append an item
  tl add 7 \"Call mom\" -d \"Sunday\"  Append an item with a description")
    )]
    Add {
        /// List id or name
        list: String,

        /// Item title
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Item description
        #[arg(long, short)]
        description: Option<String>,

        /// Output format
        #[arg(long = "output", short = 'o', value_enum, default_value_t)]
        output: OutputFormat,
    },

    /// Change an item's title or description
    #[command(
        arg_required_else_help = true,
        group = ArgGroup::new("changes")
            .required(true)
            .multiple(true)
            .args(["title", "description"]),
        after_help = colors::examples("\
Examples:
  tl edit 7 '#2' --title \"Buy oat milk\"   Retitle the second item
  tl edit 7 '#2' --description \"\"         Clear the description")
    )]
    Edit {
        /// List id or name
        list: String,

        /// Item reference (#N or id)
        item: String,

        /// New title
        #[arg(long, value_parser = non_empty_string)]
        title: Option<String>,

        /// New description (empty clears it)
        #[arg(long)]
        description: Option<String>,
    },

    /// Mark an item completed
    #[command(arg_required_else_help = true)]
    Done {
        /// List id or name
        list: String,

        /// Item reference (#N or id)
        item: String,
    },

    /// Mark an item not completed
    #[command(arg_required_else_help = true)]
    Undo {
        /// List id or name
        list: String,

        /// Item reference (#N or id)
        item: String,
    },

    /// Delete an item
    #[command(arg_required_else_help = true)]
    Rm {
        /// List id or name
        list: String,

        /// Item reference (#N or id)
        item: String,
    },

    /// Reorder an open item
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  tl move 7 1 3             Move the first open item to third place")
    )]
    Move {
        /// List id or name
        list: String,

        /// Current position among open items (1-based)
        #[arg(value_parser = position)]
        from: usize,

        /// New position among open items (1-based)
        #[arg(value_parser = position)]
        to: usize,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Generate shell completions
    #[command(after_help = colors::examples("\
Examples:
  tl completion bash > ~/.local/share/bash-completion/completions/tl
  tl completion zsh > ~/.zfunc/_tl"))]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
