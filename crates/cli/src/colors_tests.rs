// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

/// Strip all ANSI escape sequences from a string
fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[parameterized(
    header = { crate::colors::header("Lists:"), codes::HEADER },
    literal = { crate::colors::literal("tl show"), codes::LITERAL },
    muted = { crate::colors::muted("(3)"), codes::MUTED },
)]
fn paint_wraps_text_in_code(painted: String, code: u8) {
    assert!(painted.starts_with(&format!("\x1b[38;5;{}m", code)));
    assert!(painted.ends_with(RESET));
}

#[test]
fn examples_colors_headers_and_commands() {
    let text = "Examples:\n  tl show 3          Show list 3";
    let colored = colorize_examples(text);

    assert!(colored.contains(&header("Examples:")));
    assert!(colored.contains(&literal("tl show 3")));
    assert!(colored.ends_with("          Show list 3"));
}

#[test]
fn examples_preserve_alignment() {
    let text = "Examples:\n  tl add 3 \"Milk\"     Add an item\n  tl done 3 #1        Complete the first item";
    assert_eq!(strip_ansi(&colorize_examples(text)), text);
}

#[test]
fn examples_plain_line_untouched() {
    assert_eq!(colorize_examples("just text"), "just text");
}
