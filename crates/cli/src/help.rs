// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use clap::builder::styling::{Ansi256Color, Color, Style, Styles};

use crate::colors;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    let color = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = color(colors::codes::HEADER);
    let literal = color(colors::codes::LITERAL);
    let muted = color(colors::codes::MUTED);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(muted)
        .valid(muted)
}

/// Width of the command column in the commands list.
const COMMAND_COLUMN: usize = 14;

fn styled(paint: fn(&str) -> String, text: &str) -> String {
    if colors::should_colorize() {
        paint(text)
    } else {
        text.to_string()
    }
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        styled(colors::header, "Options:")
    )
}

fn section(title: &str, entries: &[(&str, &str)]) -> String {
    let mut out = styled(colors::header, title);
    for (name, about) in entries {
        let pad = COMMAND_COLUMN.saturating_sub(name.len()).max(1);
        out.push_str(&format!(
            "\n  {}{}{}",
            styled(colors::literal, name),
            " ".repeat(pad),
            about
        ));
    }
    out
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    [
        section(
            "Lists:",
            &[
                ("lists", "Show all lists with open/total counts"),
                ("show", "Show a list's items in display order"),
                ("new-list", "Create a list"),
                ("rename-list", "Rename a list"),
                ("delete-list", "Delete a list and its items"),
            ],
        ),
        section(
            "Items:",
            &[
                ("add", "Add an item to a list"),
                ("edit", "Change an item's title or description"),
                ("done", "Mark an item completed"),
                ("undo", "Mark an item not completed"),
                ("rm", "Delete an item"),
                ("move", "Reorder an open item"),
            ],
        ),
        section("Setup:", &[("completion", "Generate shell completions")]),
    ]
    .join("\n\n")
        + "\n"
}

/// Footer pointing at item references.
pub fn quickstart() -> String {
    colors::examples(
        "\
Item references:
  #N                  The Nth item as shown by 'tl show'
  <id>                The item's identifier

Quote '#N' in the shell: tl done 7 '#1'",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
