// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tl_core::ValidationError;

#[test]
fn test_error_list_not_found_display() {
    let err = Error::ListNotFound("Groceries".to_string());
    assert!(err.to_string().contains("list not found: Groceries"));
    assert!(err.to_string().contains("tl lists"));
}

#[test]
fn test_error_ambiguous_list_display() {
    let err = Error::AmbiguousList {
        name: "work".to_string(),
        ids: vec!["3".to_string(), "8".to_string()],
    };
    assert_eq!(err.to_string(), "ambiguous list name 'work' matches: 3, 8");
}

#[test]
fn test_error_item_not_found_display() {
    let err = Error::ItemNotFound("#9".to_string());
    assert!(err.to_string().contains("item not found: #9"));
}

#[test]
fn test_error_position_out_of_range_display() {
    let err = Error::PositionOutOfRange {
        position: 5,
        open: 3,
    };
    assert_eq!(
        err.to_string(),
        "position 5 is out of range (3 open items)"
    );
}

#[test]
fn test_transport_error_passes_through() {
    let err: Error = TransportError::Timeout.into();
    assert!(matches!(
        err,
        Error::Sync(SyncError::Transport(TransportError::Timeout))
    ));
    assert_eq!(err.to_string(), "request timed out");
}

#[test]
fn test_validation_error_passes_through() {
    let err: Error = tl_core::Error::from(ValidationError::FieldEmpty { field: "Title" }).into();
    assert!(err.to_string().contains("Title"));
}

#[test]
fn test_error_config_display() {
    let err = Error::Config("remote.url cannot be empty".to_string());
    assert_eq!(err.to_string(), "config error: remote.url cannot be empty");
}

#[test]
fn test_error_io_from() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(err.to_string().contains("io error"));
}
