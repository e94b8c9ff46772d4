// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tasklist - A command-line client for a remote task-list service.
//!
//! This crate provides the `tl` CLI: it keeps a local cache of the list
//! being worked on, validates input before anything reaches the network,
//! and keeps the cache consistent with the remote store.
//!
//! # Main Components
//!
//! - [`SyncController`] - Orchestrates every action against the remote gateway
//! - [`sync`] - Gateway trait, HTTP gateway and fetch sequencing
//! - [`Config`] - Remote endpoint and logging configuration
//! - [`Error`] - Error types for all CLI operations
//!
//! # Embedding
//!
//! ```rust,ignore
//! use tasklist::{Config, SyncController};
//!
//! let config = Config::resolve(None)?;
//! let mut controller = SyncController::connect(&config.gateway_config())?;
//! for summary in controller.refresh_lists().await? {
//!     println!("{} {}", summary.id, summary.name);
//! }
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
mod env;
pub mod help;
mod logging;

pub mod config;
pub mod error;
pub mod sync;

pub use cli::{Cli, Command, OutputFormat};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::setup_logging;
pub use sync::{SyncController, SyncError, SyncEvent};

use std::io;

/// Execute a parsed command line.
///
/// Completion scripts are generated without loading config or touching
/// the network. Everything else runs on a single-threaded runtime, one
/// command per process.
pub fn run(cli: Cli) -> Result<()> {
    if let Command::Completion { shell } = cli.command {
        return commands::completion(shell, &mut io::stdout().lock());
    }

    let config = Config::resolve(cli.config.as_deref())?;
    setup_logging(&config.log);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let mut controller = SyncController::connect(&config.gateway_config())?;
        let color = colors::should_colorize();
        let mut stdout = io::stdout().lock();
        commands::run(&mut controller, cli.command, &mut stdout, color).await
    })
}
