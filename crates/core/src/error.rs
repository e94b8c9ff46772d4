// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tl-core operations.

use thiserror::Error;

use crate::edit::EditTarget;

/// Input rejected locally, before anything reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },
}

/// All possible errors that can occur in tl-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("position {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("already editing {current}\n  hint: commit or cancel it first")]
    EditInProgress { current: EditTarget },

    #[error("nothing is being edited")]
    NotEditing,

    #[error("item not found: {0}")]
    ItemNotFound(String),
}

/// A specialized Result type for tl-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
