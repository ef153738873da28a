//! Presentation structure: slides, sections and the ordered slide index.
//!
//! # Module Structure
//!
//! - `slide`: `Slide` and `SlideId` value types
//! - `index`: `PresentationIndex`, built once per markup load and read-only afterwards
//! - `outline`: plain-text listing of the index

mod index;
pub mod outline;
mod slide;

pub use index::{PresentationError, PresentationIndex};
pub use outline::render_outline;
pub use slide::{Slide, SlideId};

#[cfg(test)]
pub(crate) use index::tests::{example_index, example_sections};
