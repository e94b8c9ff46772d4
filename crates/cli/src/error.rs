// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::sync::{SyncError, TransportError};

/// All possible errors that can occur in the tasklist CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("list not found: {0}\n  hint: run 'tl lists' to see available lists")]
    ListNotFound(String),

    #[error("ambiguous list name '{name}' matches: {}", ids.join(", "))]
    AmbiguousList { name: String, ids: Vec<String> },

    #[error("item not found: {0}\n  hint: run 'tl show <list>' to see item positions")]
    ItemNotFound(String),

    #[error("nothing to change\n  hint: pass --title and/or --description")]
    NothingToEdit,

    #[error("position must be at least 1")]
    InvalidPosition,

    #[error("position {position} is out of range ({open} open items)")]
    PositionOutOfRange { position: usize, open: usize },

    #[error(transparent)]
    Sync(#[from] SyncError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Error::Sync(err.into())
    }
}

impl From<tl_core::Error> for Error {
    fn from(err: tl_core::Error) -> Self {
        Error::Sync(err.into())
    }
}

/// A specialized Result type for tasklist CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
