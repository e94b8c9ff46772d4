// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Entity identifiers.
//!
//! Identifiers are assigned by the remote store and treated as opaque
//! strings. Some store revisions emit them as JSON numbers, so both forms
//! are accepted on the way in and normalized to one canonical string. The
//! rest of the crate compares identifiers by value and never coerces.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Wire form of an identifier before normalization.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl RawId {
    fn normalize(self) -> String {
        match self {
            RawId::Text(s) => s.trim().to_string(),
            RawId::Unsigned(n) => n.to_string(),
            RawId::Signed(n) => n.to_string(),
        }
    }
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates an identifier from its canonical string form.
            pub fn new(id: impl Into<String>) -> Self {
                $name(id.into().trim().to_string())
            }

            /// Returns the canonical string form.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name::new(s)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawId::deserialize(deserializer).map(|raw| $name(raw.normalize()))
            }
        }
    };
}

entity_id!(
    /// Identifier of a [`TodoList`](crate::model::TodoList).
    ListId
);

entity_id!(
    /// Identifier of an [`Item`](crate::model::Item).
    ItemId
);

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
