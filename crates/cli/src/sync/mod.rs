// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote synchronization for task lists.
//!
//! Keeps the local cache consistent with the remote service while the user
//! edits, reorders, and navigates.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Controller    │────►│   Gateway   │────►│   Remote    │
//! │ (SyncController) │◄────│   (trait)   │◄────│   Service   │
//! └──────────────────┘     └─────────────┘     └─────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │   EntityCache    │  (current list + summaries)
//! │   EditSessions   │  (one open draft)
//! │  FetchSequence   │  (stale-response guard)
//! └──────────────────┘
//! ```
//!
//! # Features
//!
//! - HTTP/JSON gateway with bearer-token auth
//! - Optimistic reorder with remote persistence and reconciliation
//! - Sequence-numbered fetches; late responses never overwrite newer state
//! - Per-action lifecycle events over an mpsc channel
//! - Injectable gateway trait for testing

mod action;
mod controller;
mod fetch;
mod gateway;
mod http;

pub use action::{Action, ActionState, ActionTracker};
pub use controller::{LoadOutcome, MoveOutcome, SyncController, SyncError, SyncEvent, SyncResult};
pub use fetch::{FetchSequence, FetchTicket, StaleResponse};
pub use gateway::{Gateway, GatewayFuture, TransportError, TransportResult};
pub use http::{GatewayConfig, HttpGateway};
