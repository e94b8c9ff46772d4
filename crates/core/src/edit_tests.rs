// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::error::ValidationError;
use crate::test_helpers::{make_item, make_list};

fn item_a() -> EditTarget {
    EditTarget::Item(ItemId::new("a"))
}

fn item_b() -> EditTarget {
    EditTarget::Item(ItemId::new("b"))
}

#[test]
fn begin_seeds_draft_from_item() {
    let mut item = make_item("a", 0);
    item.description = Some("details".into());
    let mut sessions = EditSessions::new();

    let draft = sessions.begin(item_a(), Draft::from_item(&item)).unwrap();
    assert_eq!(draft.title, "a");
    assert_eq!(draft.description, "details");
    assert!(sessions.is_editing(&item_a()));
}

#[test]
fn second_target_is_rejected_while_first_open() {
    let mut sessions = EditSessions::new();
    sessions.begin(item_a(), Draft::default()).unwrap();

    let err = sessions.begin(item_b(), Draft::default()).unwrap_err();
    assert!(matches!(err, Error::EditInProgress { current } if current == item_a()));
    assert!(sessions.is_editing(&item_a()));
    assert!(!sessions.is_editing(&item_b()));
}

#[test]
fn second_target_allowed_after_cancel() {
    let mut sessions = EditSessions::new();
    sessions.begin(item_a(), Draft::default()).unwrap();
    assert!(sessions.cancel().is_some());

    sessions.begin(item_b(), Draft::default()).unwrap();
    assert!(sessions.is_editing(&item_b()));
    assert!(!sessions.is_editing(&item_a()));
}

#[test]
fn rebegin_same_target_keeps_draft() {
    let mut sessions = EditSessions::new();
    sessions
        .begin(item_a(), Draft::from_item(&make_item("a", 0)))
        .unwrap()
        .title = "edited".into();

    let draft = sessions
        .begin(item_a(), Draft::from_item(&make_item("a", 0)))
        .unwrap();
    assert_eq!(draft.title, "edited");
}

#[test]
fn commit_trims_and_keeps_session_open() {
    let mut sessions = EditSessions::new();
    let draft = sessions.begin(item_a(), Draft::default()).unwrap();
    draft.title = "  Walk dog ".into();
    draft.description = "  ".into();

    let commit = sessions.prepare_commit().unwrap();
    assert_eq!(commit.title, "Walk dog");
    assert_eq!(commit.description, None);
    assert!(sessions.is_editing(&item_a()));

    assert!(sessions.finish(&commit.target));
    assert!(sessions.active().is_none());
}

#[test]
fn empty_title_rejected_and_session_stays() {
    let mut sessions = EditSessions::new();
    sessions.begin(item_a(), Draft::default()).unwrap().title = "   ".into();

    let err = sessions.prepare_commit().unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::FieldEmpty { field: "Title" })
    ));
    assert!(sessions.is_editing(&item_a()));
}

#[test]
fn list_name_commit_uses_name_rules() {
    let list = make_list(vec![]);
    let target = EditTarget::ListName(list.id.clone());
    let mut sessions = EditSessions::new();
    sessions.begin(target.clone(), Draft::from_list(&list)).unwrap().title = String::new();

    assert!(matches!(
        sessions.prepare_commit(),
        Err(Error::Validation(ValidationError::FieldEmpty { field: "Name" }))
    ));

    sessions.draft_mut().unwrap().title = " Home ".into();
    let commit = sessions.prepare_commit().unwrap();
    assert_eq!(commit.title, "Home");
    assert_eq!(commit.target, target);
}

#[test]
fn commit_without_session() {
    assert!(matches!(
        EditSessions::new().prepare_commit(),
        Err(Error::NotEditing)
    ));
}

#[test]
fn finish_other_target_is_ignored() {
    let mut sessions = EditSessions::new();
    sessions.begin(item_a(), Draft::default()).unwrap();
    assert!(!sessions.finish(&item_b()));
    assert!(sessions.is_editing(&item_a()));
}

#[test]
fn dirty_tracking() {
    let mut sessions = EditSessions::new();
    sessions
        .begin(item_a(), Draft::from_item(&make_item("a", 0)))
        .unwrap();
    assert!(!sessions.active().unwrap().is_dirty());

    sessions.draft_mut().unwrap().description = "more".into();
    assert!(sessions.active().unwrap().is_dirty());
}

#[test]
fn commit_patch_sets_title_and_description() {
    let commit = Commit {
        target: item_a(),
        title: "t".into(),
        description: None,
    };
    let patch = commit.item_patch();
    assert_eq!(patch.title.as_deref(), Some("t"));
    assert_eq!(patch.description, Some(None));
    assert_eq!(patch.completed, None);
}

#[test]
fn target_display() {
    assert_eq!(item_a().to_string(), "item a");
    assert_eq!(
        EditTarget::ListName(ListId::new("l1")).to_string(),
        "name of list l1"
    );
}
