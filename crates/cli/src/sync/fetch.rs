// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fetch sequencing.
//!
//! Each load (or list-returning mutation) takes a ticket carrying a
//! monotonically increasing sequence number. A completed response is only
//! applied if its list is still the selected one and no newer response has
//! been applied already; anything else is a [`StaleResponse`].

use tl_core::ListId;

/// Handle for one in-flight load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    list_id: ListId,
    seq: u64,
}

impl FetchTicket {
    pub fn list_id(&self) -> &ListId {
        &self.list_id
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// A completed fetch that lost to a newer one or to navigation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("stale response for list {list_id} (fetch #{seq}, latest applied #{applied})")]
pub struct StaleResponse {
    pub list_id: ListId,
    pub seq: u64,
    pub applied: u64,
}

/// Issues tickets and decides which completions may touch the cache.
#[derive(Debug, Default)]
pub struct FetchSequence {
    next_seq: u64,
    applied_seq: u64,
    selected: Option<ListId>,
}

impl FetchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `list_id` and returns a ticket newer than every earlier one.
    pub fn issue(&mut self, list_id: &ListId) -> FetchTicket {
        self.next_seq += 1;
        self.selected = Some(list_id.clone());
        FetchTicket {
            list_id: list_id.clone(),
            seq: self.next_seq,
        }
    }

    /// Reports whether a completion for `ticket` would be stale.
    pub fn check(&self, ticket: &FetchTicket) -> Result<(), StaleResponse> {
        let selected = self.selected.as_ref() == Some(&ticket.list_id);
        if !selected || ticket.seq <= self.applied_seq {
            return Err(StaleResponse {
                list_id: ticket.list_id.clone(),
                seq: ticket.seq,
                applied: self.applied_seq,
            });
        }
        Ok(())
    }

    /// Accepts a completed fetch, or reports it stale.
    pub fn accept(&mut self, ticket: &FetchTicket) -> Result<(), StaleResponse> {
        self.check(ticket)?;
        self.applied_seq = ticket.seq;
        Ok(())
    }

    /// The list loads are currently being accepted for.
    pub fn selected(&self) -> Option<&ListId> {
        self.selected.as_ref()
    }

    /// Deselects; every outstanding ticket becomes stale.
    pub fn invalidate(&mut self) {
        self.selected = None;
        self.applied_seq = self.next_seq;
    }
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
