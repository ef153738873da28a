//! Status bar rendering for the player.
//!
//! Displays playback state, the current frame and keyboard shortcuts.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::player::render::caption::Caption;

// ANSI color codes
const WHITE: &str = "\x1b[97m";
const DARK_GREY: &str = "\x1b[90m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
pub(crate) const RESET: &str = "\x1b[0m";

/// Truncate `text` so its display width fits in `width` columns.
///
/// Wide characters that would straddle the edge are dropped and an ellipsis
/// marks the cut.
pub fn fit_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Accumulates colored segments while tracking visible width.
///
/// Never grows past `width` columns: text is clipped at the edge and hints
/// that do not fit whole are left out.
struct StatusLine {
    output: String,
    visible_len: usize,
    width: usize,
}

impl StatusLine {
    fn new(width: usize) -> Self {
        Self {
            output: String::with_capacity(256),
            visible_len: 0,
            width,
        }
    }

    fn remaining(&self) -> usize {
        self.width.saturating_sub(self.visible_len)
    }

    fn push(&mut self, color: &str, text: &str) {
        self.output.push_str(color);
        for c in text.chars() {
            let w = c.width().unwrap_or(0);
            if w > self.remaining() {
                break;
            }
            self.output.push(c);
            self.visible_len += w;
        }
    }

    fn hint(&mut self, key: &str, label: &str) {
        if key.width() + label.width() > self.remaining() {
            return;
        }
        self.push(CYAN, key);
        self.push(DARK_GREY, label);
    }

    /// Pad to full width to overwrite any leftover content
    fn finish(mut self) -> String {
        self.output.push_str(&" ".repeat(self.remaining()));
        self.output.push_str(RESET);
        self.output
    }
}

/// Build the status/controls bar for the bottom terminal row.
///
/// The result is exactly `width` columns wide so printing it on the last
/// row never wraps; key hints are dropped from the right as space runs out.
pub fn build_status_bar(caption: &Caption, width: usize) -> String {
    let mut line = StatusLine::new(width);

    line.push(WHITE, " ");
    line.push(WHITE, if caption.paused { "▶  " } else { "⏸  " });
    line.push(DARK_GREY, "frm:");
    line.push(WHITE, &format!("{} ", caption.frame));
    if caption.at_end {
        line.push(YELLOW, "[END] ");
    }

    line.push(DARK_GREY, "│ ");
    line.hint("space", if caption.paused { ":play " } else { ":playing " });
    line.hint("←→", ":slide ");
    line.hint("⇧←→", ":section ");
    line.hint("b", ":first ");
    line.hint("e", ":last ");
    line.hint("r", ":restart ");
    line.hint("q", ":quit");

    line.finish()
}

/// Strip CSI escape sequences, leaving the visible text.
#[cfg(test)]
pub(crate) fn strip_ansi(s: &str) -> String {
    let mut out = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.next(); // '['
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
