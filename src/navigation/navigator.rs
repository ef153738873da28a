//! Session-scoped navigator owning the mutable navigation state.

use std::sync::Arc;

use crate::navigation::command::Command;
use crate::navigation::state::NavState;
use crate::presentation::{PresentationIndex, Slide};

/// Applies commands to one playback session's state.
///
/// The index is shared read-only; the state is the only mutable part.
#[derive(Debug, Clone)]
pub struct Navigator {
    index: Arc<PresentationIndex>,
    state: NavState,
}

impl Navigator {
    pub fn new(index: Arc<PresentationIndex>) -> Self {
        let state = NavState::initial(&index);
        Self { index, state }
    }

    pub fn index(&self) -> &PresentationIndex {
        &self.index
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    /// Return to the session's initial state.
    pub fn reset(&mut self) {
        self.state = NavState::initial(&self.index);
        tracing::debug!("navigator reset -> {}", self.state);
    }

    /// Apply a command, returning the frame to seek to (if any).
    pub fn apply(&mut self, command: Command) -> Option<u64> {
        let old_state = self.state;
        let (new_state, frame) = command.apply(old_state, &self.index);
        self.state = new_state;

        tracing::debug!("{} -> [{}] -> {}", old_state, command, new_state);
        frame
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.state.current().and_then(|id| self.index.by_full_id(id))
    }

    pub fn next_slide(&self) -> Option<&Slide> {
        self.state.next().and_then(|id| self.index.by_full_id(id))
    }

    /// Offset forward playback should pause at; `None` means never.
    pub fn next_offset(&self) -> Option<u64> {
        self.next_slide().map(|s| s.offset)
    }

    /// Whether playback at `frame` has reached the next slide boundary.
    ///
    /// Level-triggered (`frame >= next`) so skipped frames still stop.
    pub fn should_stop_at(&self, frame: u64) -> bool {
        self.next_offset().is_some_and(|next| frame >= next)
    }
}
