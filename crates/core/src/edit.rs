// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Edit sessions.
//!
//! At most one entity (an item, or the displayed list's name) is in edit
//! mode at a time. A session holds draft strings seeded from the committed
//! values; nothing outside this module reads them. A session ends only
//! through a successful commit ([`EditSessions::finish`]) or an explicit
//! [`EditSessions::cancel`].

use std::fmt;

use crate::error::{Error, Result};
use crate::id::{ItemId, ListId};
use crate::model::{Item, ItemPatch, TodoList};
use crate::validate::{validate_description, validate_name, validate_title};

/// What is being edited.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditTarget {
    /// The name of a list.
    ListName(ListId),
    /// An item's title and description.
    Item(ItemId),
}

impl fmt::Display for EditTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditTarget::ListName(id) => write!(f, "name of list {}", id),
            EditTarget::Item(id) => write!(f, "item {}", id),
        }
    }
}

/// Draft field values. For a list name only `title` is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

impl Draft {
    pub fn from_item(item: &Item) -> Self {
        Draft {
            title: item.title.clone(),
            description: item.description.clone().unwrap_or_default(),
        }
    }

    pub fn from_list(list: &TodoList) -> Self {
        Draft {
            title: list.name.clone(),
            description: String::new(),
        }
    }
}

/// An open edit session.
#[derive(Debug, Clone)]
pub struct EditSession {
    target: EditTarget,
    seed: Draft,
    draft: Draft,
}

impl EditSession {
    pub fn target(&self) -> &EditTarget {
        &self.target
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Returns true if the draft differs from the values it was seeded with.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.seed
    }
}

/// Validated, trimmed values ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub target: EditTarget,
    pub title: String,
    pub description: Option<String>,
}

impl Commit {
    /// The item update carrying this commit's fields.
    pub fn item_patch(&self) -> ItemPatch {
        ItemPatch {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            ..Default::default()
        }
    }
}

/// Tracks the single active edit session.
#[derive(Debug, Default)]
pub struct EditSessions {
    active: Option<EditSession>,
}

impl EditSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters edit mode on `target`, seeding the draft from `seed`.
    ///
    /// Re-entering the target already being edited keeps its draft.
    /// Entering a different target while one is open is rejected.
    pub fn begin(&mut self, target: EditTarget, seed: Draft) -> Result<&mut Draft> {
        if let Some(current) = self.active.as_ref().map(|s| &s.target) {
            if *current != target {
                return Err(Error::EditInProgress {
                    current: current.clone(),
                });
            }
        }
        if self.active.is_none() {
            self.active = Some(EditSession {
                target,
                draft: seed.clone(),
                seed,
            });
        }
        self.draft_mut().ok_or(Error::NotEditing)
    }

    pub fn active(&self) -> Option<&EditSession> {
        self.active.as_ref()
    }

    pub fn is_editing(&self, target: &EditTarget) -> bool {
        self.active
            .as_ref()
            .is_some_and(|session| &session.target == target)
    }

    /// Mutable access to the open draft.
    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.active.as_mut().map(|session| &mut session.draft)
    }

    /// Validates the open draft without closing the session.
    pub fn prepare_commit(&self) -> Result<Commit> {
        let session = self.active.as_ref().ok_or(Error::NotEditing)?;
        let commit = match &session.target {
            EditTarget::ListName(_) => Commit {
                target: session.target.clone(),
                title: validate_name(&session.draft.title)?,
                description: None,
            },
            EditTarget::Item(_) => Commit {
                target: session.target.clone(),
                title: validate_title(&session.draft.title)?,
                description: validate_description(&session.draft.description)?,
            },
        };
        Ok(commit)
    }

    /// Closes the session for `target` after its commit was applied.
    ///
    /// Returns false if `target` is not the open session.
    pub fn finish(&mut self, target: &EditTarget) -> bool {
        if self.is_editing(target) {
            self.active = None;
            true
        } else {
            false
        }
    }

    /// Discards the open session and its drafts.
    pub fn cancel(&mut self) -> Option<EditSession> {
        self.active.take()
    }
}

#[cfg(test)]
#[path = "edit_tests.rs"]
mod tests;
