//! Navigation state: where playback is relative to slide boundaries.

use std::fmt;

use thiserror::Error;

use crate::presentation::{PresentationIndex, SlideId};

/// Errors raised when constructing a navigation state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Illegal navigation state: neither a current nor a next slide")]
    IllegalState,
}

/// The `(current, next)` pair tracked during playback.
///
/// `current` is the slide on screen, `next` is the slide forward playback
/// should stop at. At most one of them is absent, so the three legal shapes
/// are spelled out as variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// Playback has not reached the first slide yet
    BeforeStart { next: SlideId },
    /// Between two slide boundaries
    Between { current: SlideId, next: SlideId },
    /// Past the final boundary; forward playback never stops again
    AtEnd { current: SlideId },
}

impl NavState {
    /// Validating constructor over the optional pair.
    pub fn from_parts(
        current: Option<SlideId>,
        next: Option<SlideId>,
    ) -> Result<Self, NavigationError> {
        match (current, next) {
            (None, None) => Err(NavigationError::IllegalState),
            (None, Some(next)) => Ok(Self::BeforeStart { next }),
            (Some(current), Some(next)) => Ok(Self::Between { current, next }),
            (Some(current), None) => Ok(Self::AtEnd { current }),
        }
    }

    /// State with a known next slide and an optional current one.
    pub(crate) fn heading_to(current: Option<SlideId>, next: SlideId) -> Self {
        match current {
            Some(current) => Self::Between { current, next },
            None => Self::BeforeStart { next },
        }
    }

    /// State with a known current slide and an optional next one.
    pub(crate) fn showing(current: SlideId, next: Option<SlideId>) -> Self {
        match next {
            Some(next) => Self::Between { current, next },
            None => Self::AtEnd { current },
        }
    }

    /// Session start: nothing shown yet, stop at the first slide.
    pub fn initial(index: &PresentationIndex) -> Self {
        Self::BeforeStart {
            next: index.first().id(),
        }
    }

    pub fn current(&self) -> Option<SlideId> {
        match *self {
            Self::BeforeStart { .. } => None,
            Self::Between { current, .. } | Self::AtEnd { current } => Some(current),
        }
    }

    pub fn next(&self) -> Option<SlideId> {
        match *self {
            Self::BeforeStart { next } | Self::Between { next, .. } => Some(next),
            Self::AtEnd { .. } => None,
        }
    }

    pub fn into_parts(self) -> (Option<SlideId>, Option<SlideId>) {
        (self.current(), self.next())
    }
}

impl fmt::Display for NavState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |id: Option<SlideId>| id.map_or_else(|| "-".to_string(), |id| id.to_string());
        write!(f, "State({}, {})", show(self.current()), show(self.next()))
    }
}
