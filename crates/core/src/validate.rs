// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client-side validation of user-entered text.
//!
//! Every function here returns the normalized (trimmed) value on success, so
//! callers hand exactly what was validated to the network layer.

use crate::error::ValidationError;

// Input length limits
pub const MAX_NAME_LENGTH: usize = 200;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;

/// Validate a list name: non-empty after trimming, within length limits.
pub fn validate_name(name: &str) -> Result<String, ValidationError> {
    required("Name", name, MAX_NAME_LENGTH)
}

/// Validate an item title: non-empty after trimming, within length limits.
pub fn validate_title(title: &str) -> Result<String, ValidationError> {
    required("Title", title, MAX_TITLE_LENGTH)
}

/// Validate an optional description.
///
/// Blank descriptions collapse to `None`.
pub fn validate_description(description: &str) -> Result<Option<String>, ValidationError> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    check_length("Description", trimmed, MAX_DESCRIPTION_LENGTH)?;
    Ok(Some(trimmed.to_string()))
}

fn required(field: &'static str, text: &str, max: usize) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::FieldEmpty { field });
    }
    check_length(field, trimmed, max)?;
    Ok(trimmed.to_string())
}

fn check_length(field: &'static str, text: &str, max: usize) -> Result<(), ValidationError> {
    let actual = text.chars().count();
    if actual > max {
        return Err(ValidationError::FieldTooLong { field, actual, max });
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
