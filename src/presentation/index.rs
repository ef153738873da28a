//! Ordered slide index built from validated markup.
//!
//! The index keeps slides in a flat vector ordered by offset, plus lookup
//! tables from identity to position and from section to its first slide.
//! Neighbour queries are therefore position arithmetic instead of scans.

use std::collections::HashMap;

use thiserror::Error;

use crate::markup::{Markup, SectionMarkup};
use crate::presentation::slide::{numbered_title, Slide, SlideId};

/// Errors raised while building a presentation index.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PresentationError {
    #[error("At least one slide is required")]
    Empty,
}

/// Immutable, offset-ordered collection of slides.
///
/// Assumes offsets strictly increase across the whole flattened input; the
/// markup loader enforces that before the index is built.
#[derive(Debug, Clone)]
pub struct PresentationIndex {
    /// Slides in authoring order (== offset order)
    slides: Vec<Slide>,
    /// Full id -> position in `slides`
    positions: HashMap<SlideId, usize>,
    /// Position of the first slide of every non-empty section, in order
    section_starts: Vec<usize>,
    /// Section id -> position in `section_starts`
    section_order: HashMap<u32, usize>,
}

impl PresentationIndex {
    /// Build the index from an ordered list of sections.
    ///
    /// Section ids are assigned from 1 in input order; slide ids restart at 1
    /// in every section. A section without slides still consumes its id.
    pub fn build(sections: &[SectionMarkup]) -> Result<Self, PresentationError> {
        let mut slides = Vec::new();
        let mut positions = HashMap::new();
        let mut section_starts = Vec::new();
        let mut section_order = HashMap::new();

        for (section_id, section) in (1u32..).zip(sections) {
            let section_title = numbered_title("Section", section_id, section.label.as_deref());

            for (slide_id, slide) in (1u32..).zip(&section.slides) {
                let position = slides.len();
                if slide_id == 1 {
                    section_order.insert(section_id, section_starts.len());
                    section_starts.push(position);
                }

                let slide = Slide {
                    section_id,
                    slide_id,
                    section_title: section_title.clone(),
                    slide_title: numbered_title("Slide", slide_id, slide.label.as_deref()),
                    offset: slide.offset,
                };
                positions.insert(slide.id(), position);
                slides.push(slide);
            }
        }

        if slides.is_empty() {
            return Err(PresentationError::Empty);
        }

        debug_assert!(
            slides.windows(2).all(|w| w[0].offset < w[1].offset),
            "slide offsets must strictly increase"
        );

        tracing::debug!(
            slides = slides.len(),
            sections = section_starts.len(),
            "built presentation index"
        );

        Ok(Self {
            slides,
            positions,
            section_starts,
            section_order,
        })
    }

    /// Build the index from a loaded markup document.
    pub fn from_markup(markup: &Markup) -> Result<Self, PresentationError> {
        Self::build(&markup.sections)
    }

    /// All slides in offset order.
    pub fn all_slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides (always at least 1).
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false for a built index.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Number of sections that contain at least one slide.
    pub fn section_count(&self) -> usize {
        self.section_starts.len()
    }

    pub fn by_full_id(&self, id: SlideId) -> Option<&Slide> {
        self.positions.get(&id).map(|&pos| &self.slides[pos])
    }

    /// Look up a slide by its 1-based ordinal.
    pub fn by_number(&self, number: usize) -> Option<&Slide> {
        number.checked_sub(1).and_then(|pos| self.slides.get(pos))
    }

    pub fn first(&self) -> &Slide {
        // Non-empty by construction
        &self.slides[0]
    }

    pub fn last(&self) -> &Slide {
        &self.slides[self.slides.len() - 1]
    }

    /// Slide immediately after `id` in offset order.
    ///
    /// Returns `None` for the last slide and for ids not in this index.
    pub fn next_slide(&self, id: SlideId) -> Option<&Slide> {
        let pos = *self.positions.get(&id)?;
        self.slides.get(pos + 1)
    }

    /// Slide immediately before `id` in offset order.
    ///
    /// Returns `None` for the first slide and for ids not in this index.
    pub fn prev_slide(&self, id: SlideId) -> Option<&Slide> {
        let pos = *self.positions.get(&id)?;
        pos.checked_sub(1).map(|prev| &self.slides[prev])
    }

    /// First slide of the section after `section_id`.
    ///
    /// When `section_id` is the last section this falls back to the first
    /// slide of `section_id` itself. `None` only for unknown sections.
    pub fn next_section_start(&self, section_id: u32) -> Option<&Slide> {
        let order = *self.section_order.get(&section_id)?;
        match self.section_starts.get(order + 1) {
            Some(&pos) => Some(&self.slides[pos]),
            None => self.by_full_id(SlideId::section_start(section_id)),
        }
    }

    /// First slide of the section before `section_id`.
    ///
    /// When `section_id` is the first section this falls back to the first
    /// slide of `section_id` itself. `None` only for unknown sections.
    pub fn prev_section_start(&self, section_id: u32) -> Option<&Slide> {
        let order = *self.section_order.get(&section_id)?;
        match order.checked_sub(1) {
            Some(prev) => Some(&self.slides[self.section_starts[prev]]),
            None => self.by_full_id(SlideId::section_start(section_id)),
        }
    }
}
