//! Full-screen caption rendering.

use std::io::Write;

use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use unicode_width::UnicodeWidthStr;

use crate::player::render::caption::Caption;
use crate::player::render::status::{build_status_bar, fit_to_width, RESET};

const BOLD: &str = "\x1b[1m";
const GREY: &str = "\x1b[37m";

/// Column at which `text` must start to appear centred.
pub fn centered_col(text: &str, width: u16) -> u16 {
    let text_width = text.width().min(width as usize) as u16;
    (width - text_width) / 2
}

/// Draw the caption centred on screen with the status bar on the last row.
pub fn render_screen<W: Write>(out: &mut W, caption: &Caption, cols: u16, rows: u16) -> Result<()> {
    let width = cols as usize;
    let heading = fit_to_width(&caption.heading, width);
    let title = fit_to_width(&caption.title, width);
    let middle = rows.saturating_sub(1) / 2;

    queue!(out, Clear(ClearType::All))?;
    queue!(
        out,
        MoveTo(centered_col(&heading, cols), middle.saturating_sub(1)),
        Print(format!("{}{}{}", BOLD, heading, RESET))
    )?;
    if !title.is_empty() {
        queue!(
            out,
            MoveTo(centered_col(&title, cols), middle),
            Print(format!("{}{}{}", GREY, title, RESET))
        )?;
    }
    queue!(
        out,
        MoveTo(0, rows.saturating_sub(1)),
        Print(build_status_bar(caption, width))
    )?;
    out.flush()?;
    Ok(())
}
