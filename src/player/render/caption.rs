//! Slide caption shown under the video.

use crate::navigation::Navigator;

/// Text describing what is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caption {
    /// `"{section}/{slide} | {section title}"`, or the presentation title
    /// before the first slide
    pub heading: String,
    /// Slide title, empty before the first slide
    pub title: String,
    pub frame: u64,
    pub paused: bool,
    /// True once forward playback will no longer stop
    pub at_end: bool,
}

impl Caption {
    pub fn new(presentation_title: &str, navigator: &Navigator, frame: u64, paused: bool) -> Self {
        let (heading, title) = match navigator.current_slide() {
            Some(slide) => (
                format!("{} | {}", slide.id(), slide.section_title),
                slide.slide_title.clone(),
            ),
            None => (presentation_title.to_string(), String::new()),
        };

        Self {
            heading,
            title,
            frame,
            paused,
            at_end: navigator.next_slide().is_none(),
        }
    }
}
