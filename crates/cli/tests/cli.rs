// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end tests of the `tl` binary.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

#[test]
fn help_lists_command_groups() {
    let dir = TempDir::new().unwrap();
    tl(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lists:"))
        .stdout(predicate::str::contains("new-list"))
        .stdout(predicate::str::contains("move"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    tl(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn blank_list_name_rejected_before_network() {
    let dir = TempDir::new().unwrap();
    tl(&dir)
        .args(["new-list", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));
}

#[test]
fn unreachable_remote_reports_network_error() {
    let dir = TempDir::new().unwrap();
    tl(&dir)
        .env("TASKLIST_URL", dead_url())
        .arg("lists")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("error: network error"));
}

#[test]
fn malformed_config_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[remote\nurl = ").unwrap();
    tl(&dir)
        .arg("lists")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config error"));
}

#[test]
fn unknown_config_key_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[remote]\nendpoint = \"x\"\n").unwrap();
    tl(&dir)
        .arg("lists")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("config error"));
}

#[test]
fn completion_needs_no_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "not toml at all [").unwrap();
    tl(&dir)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_tl()"));
}

#[test]
fn lists_against_remote() {
    let dir = TempDir::new().unwrap();
    let (url, request) = serve_once(
        r#"[{"id": 3, "name": "Groceries", "items": [
              {"id": 1, "title": "Milk", "completed": false, "order": 0,
               "createdAt": "2024-01-01T00:00:00Z"},
              {"id": 2, "title": "Eggs", "completed": true, "order": 1,
               "createdAt": "2024-01-01T00:00:00Z"}],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"}]"#,
    );
    tl(&dir)
        .env("TASKLIST_URL", url)
        .arg("lists")
        .assert()
        .success()
        .stdout("3  Groceries  (1 open, 2 total)\n");
    assert!(request.join().unwrap().starts_with("GET /api/lists"));
}

#[test]
fn log_file_from_config() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("logs").join("tl.log");
    std::fs::write(
        dir.path().join("config.toml"),
        format!(
            "[remote]\nurl = \"{}\"\n\n[log]\nfile = \"{}\"\n",
            dead_url(),
            log.display()
        ),
    )
    .unwrap();
    tl(&dir)
        .env("RUST_LOG", "debug")
        .arg("lists")
        .assert()
        .code(1);
    assert!(log.exists());
}
