//! Subcommand handlers

pub mod completions;
pub mod config;
pub mod outline;
pub mod show;

use unicode_width::UnicodeWidthStr;

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print `message` inside a framed box on stderr, titled `title`.
///
/// Colors are skipped when `NO_COLOR` is set.
pub fn print_error_panel(title: &str, message: &str) {
    let (color, reset) = if std::env::var_os("NO_COLOR").is_some() {
        ("", "")
    } else {
        (RED, RESET)
    };

    let inner = message
        .lines()
        .map(UnicodeWidthStr::width)
        .chain(std::iter::once(title.width() + 2))
        .max()
        .unwrap_or(0);

    let top_fill = "─".repeat(inner - title.width());
    eprintln!("{}╭─ {}{}╮{}", color, title, top_fill, reset);
    for line in message.lines() {
        let padding = " ".repeat(inner - line.width());
        eprintln!("{}│{} {}{} {}│{}", color, reset, line, padding, color, reset);
    }
    eprintln!("{}╰{}╯{}", color, "─".repeat(inner + 2), reset);
}
