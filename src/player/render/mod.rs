//! Rendering components for the player.
//!
//! This module contains the caption model and the terminal drawing
//! functions used by the preview backend.

mod caption;
mod screen;
mod status;

pub use caption::Caption;
pub use screen::{centered_col, render_screen};
pub use status::{build_status_bar, fit_to_width};
