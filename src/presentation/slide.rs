//! Slide value types.

use std::fmt;

use serde::Serialize;

/// Full identity of a slide: `(section_id, slide_id)`, both 1-based.
///
/// Section ids are assigned once per section in authoring order, slide ids
/// restart at 1 in every section. Ids are never reused within a presentation,
/// but they do not order slides across sections - use the index for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SlideId {
    pub section: u32,
    pub slide: u32,
}

impl SlideId {
    pub const fn new(section: u32, slide: u32) -> Self {
        Self { section, slide }
    }

    /// Id of the first slide in the given section.
    pub const fn section_start(section: u32) -> Self {
        Self::new(section, 1)
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.section, self.slide)
    }
}

impl From<(u32, u32)> for SlideId {
    fn from((section, slide): (u32, u32)) -> Self {
        Self::new(section, slide)
    }
}

/// A single addressable slide anchored to a video frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub section_id: u32,
    pub slide_id: u32,
    pub section_title: String,
    pub slide_title: String,
    /// Frame number at which this slide becomes active
    pub offset: u64,
}

impl Slide {
    pub fn id(&self) -> SlideId {
        SlideId::new(self.section_id, self.slide_id)
    }
}

/// Build a display title like `"Section 2."` or `"Slide 1. Title"`.
pub(crate) fn numbered_title(kind: &str, number: u32, label: Option<&str>) -> String {
    match label {
        Some(label) if !label.is_empty() => format!("{} {}. {}", kind, number, label),
        _ => format!("{} {}.", kind, number),
    }
}
