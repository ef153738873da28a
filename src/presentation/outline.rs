//! Plain-text outline of a presentation.

use std::fmt::Write;

use crate::presentation::PresentationIndex;

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Render one line per slide in offset order.
///
/// Each line carries the slide ordinal (as accepted by `by_number`), the
/// full id, the frame offset and both titles.
pub fn render_outline(title: &str, index: &PresentationIndex) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(
        out,
        "{}, {}",
        plural(index.len(), "slide"),
        plural(index.section_count(), "section")
    );
    out.push('\n');

    for (number, slide) in (1usize..).zip(index.all_slides()) {
        let _ = writeln!(
            out,
            "{:>3}  {:<5} {:>8}  {} | {}",
            number,
            slide.id().to_string(),
            slide.offset,
            slide.section_title,
            slide.slide_title
        );
    }

    out
}
