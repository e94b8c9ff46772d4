// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::sync::gateway_tests::{make_done_item, make_item, make_list, FakeGateway};
use yare::parameterized;

fn named(id: &str, name: &str) -> TodoList {
    TodoList {
        name: name.to_string(),
        ..make_list(id, vec![])
    }
}

fn controller(lists: Vec<TodoList>) -> SyncController<FakeGateway> {
    let gateway = lists
        .into_iter()
        .fold(FakeGateway::new(), |gateway, list| gateway.with_list(list));
    SyncController::with_gateway(gateway)
}

fn mixed() -> TodoList {
    make_list(
        "1",
        vec![
            make_done_item("z", 0),
            make_item("a", 0),
            make_item("b", 1),
        ],
    )
}

#[tokio::test]
async fn resolve_list_by_id() {
    let mut controller = controller(vec![named("3", "Groceries"), named("8", "Work")]);
    let id = resolve_list(&mut controller, "8").await.unwrap();
    assert_eq!(id, ListId::new("8"));
}

#[tokio::test]
async fn resolve_list_by_name_ignores_case() {
    let mut controller = controller(vec![named("3", "Groceries"), named("8", "Work")]);
    let id = resolve_list(&mut controller, " groceries ").await.unwrap();
    assert_eq!(id, ListId::new("3"));
}

#[tokio::test]
async fn resolve_list_prefers_id_over_name() {
    let mut controller = controller(vec![named("3", "8"), named("8", "Work")]);
    let id = resolve_list(&mut controller, "8").await.unwrap();
    assert_eq!(id, ListId::new("8"));
}

#[tokio::test]
async fn resolve_list_ambiguous_name() {
    let mut controller = controller(vec![named("3", "Work"), named("8", "work")]);
    let err = resolve_list(&mut controller, "Work").await.unwrap_err();
    match err {
        Error::AmbiguousList { name, ids } => {
            assert_eq!(name, "Work");
            assert_eq!(ids, vec!["3", "8"]);
        }
        other => panic!("expected AmbiguousList, got {other:?}"),
    }
}

#[tokio::test]
async fn resolve_list_not_found() {
    let mut controller = controller(vec![named("3", "Groceries")]);
    let err = resolve_list(&mut controller, "Chores").await.unwrap_err();
    assert!(matches!(err, Error::ListNotFound(name) if name == "Chores"));
}

#[parameterized(
    first_open = { "#1", "a" },
    second_open = { "#2", "b" },
    completed_last = { "#3", "z" },
    by_id = { "b", "b" },
    padded = { " #1 ", "a" },
)]
fn resolve_item_finds(reference: &str, expected: &str) {
    let id = resolve_item(&mixed(), reference).unwrap();
    assert_eq!(id, ItemId::new(expected));
}

#[parameterized(
    zero = { "#0" },
    past_end = { "#4" },
    not_a_number = { "#x" },
    unknown_id = { "q" },
)]
fn resolve_item_rejects(reference: &str) {
    let err = resolve_item(&mixed(), reference).unwrap_err();
    assert!(matches!(err, Error::ItemNotFound(_)));
}

#[test]
fn display_position_is_one_based() {
    let list = mixed();
    assert_eq!(display_position(&list, &ItemId::new("a")), Some(1));
    assert_eq!(display_position(&list, &ItemId::new("z")), Some(3));
    assert_eq!(display_position(&list, &ItemId::new("q")), None);
}

#[test]
fn completion_script_names_binary() {
    let mut out = Vec::new();
    completion(Shell::Bash, &mut out).unwrap();
    let script = String::from_utf8(out).unwrap();
    assert!(script.contains("_tl()"));
}

#[tokio::test]
async fn run_dispatches_lists() {
    let mut controller = controller(vec![named("3", "Groceries")]);
    let mut out = Vec::new();
    run(
        &mut controller,
        Command::Lists {
            output: OutputFormat::Text,
        },
        &mut out,
        false,
    )
    .await
    .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "3  Groceries  (0 open, 0 total)\n"
    );
}
