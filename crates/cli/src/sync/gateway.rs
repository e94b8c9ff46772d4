// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote gateway abstraction.
//!
//! Provides a trait-based request/response layer that enables:
//! - Real HTTP calls for production ([`HttpGateway`](super::HttpGateway))
//! - In-memory fakes for unit testing
//!
//! Every call returns a whole-entity snapshot or a structured
//! [`TransportError`]; there are no sentinel values.

use std::future::Future;
use std::pin::Pin;

use tl_core::{Item, ItemId, ItemPatch, ListId, NewItem, TodoList};

/// Error type for remote calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request never got a response (connection refused, reset, DNS).
    #[error("network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Credentials were missing, invalid, or expired.
    #[error("not authorized\n  hint: check remote.token in the config or TASKLIST_TOKEN")]
    Unauthorized,

    /// The addressed entity does not exist on the remote.
    #[error("not found: {0}")]
    NotFound(String),

    /// The remote refused the request as invalid.
    #[error("rejected by server: {0}")]
    Rejected(String),

    /// Any other non-success status.
    #[error("server returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),

    /// The configured remote URL cannot address routes.
    #[error("invalid remote url {0}")]
    InvalidUrl(String),
}

/// Result type for remote calls.
pub type TransportResult<T> = Result<T, TransportError>;

/// Boxed future returned by every [`Gateway`] method.
pub type GatewayFuture<'a, T> = Pin<Box<dyn Future<Output = TransportResult<T>> + Send + 'a>>;

/// Typed remote calls for list and item CRUD.
///
/// This trait abstracts over the actual transport so the controller can be
/// driven by an in-memory store in tests.
pub trait Gateway: Send + Sync {
    /// Fetch every list.
    fn list_all(&self) -> GatewayFuture<'_, Vec<TodoList>>;

    /// Create a list with the given name.
    fn create_list<'a>(&'a self, name: &'a str) -> GatewayFuture<'a, TodoList>;

    /// Fetch one list with its items.
    fn read_list<'a>(&'a self, id: &'a ListId) -> GatewayFuture<'a, TodoList>;

    /// Rename a list.
    fn update_list<'a>(&'a self, id: &'a ListId, name: &'a str) -> GatewayFuture<'a, TodoList>;

    /// Delete a list.
    fn delete_list<'a>(&'a self, id: &'a ListId) -> GatewayFuture<'a, ()>;

    /// Create an item in a list.
    fn create_item<'a>(&'a self, list_id: &'a ListId, item: &'a NewItem)
        -> GatewayFuture<'a, Item>;

    /// Fetch one item.
    fn read_item<'a>(&'a self, id: &'a ItemId) -> GatewayFuture<'a, Item>;

    /// Apply a partial update to an item.
    fn update_item<'a>(&'a self, id: &'a ItemId, patch: &'a ItemPatch) -> GatewayFuture<'a, Item>;

    /// Delete an item.
    fn delete_item<'a>(&'a self, id: &'a ItemId) -> GatewayFuture<'a, ()>;

    /// Persist an item's new position after a reorder.
    fn update_order<'a>(&'a self, id: &'a ItemId, position: u32) -> GatewayFuture<'a, ()>;
}
