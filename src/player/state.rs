//! Shared player types
//!
//! Contains the actions produced by input mapping and the control-flow
//! signal returned to the main loop.

use crate::navigation::Command;

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player
    Quit,
}

/// Something the presenter asked the player to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Run a navigation command and seek to its target
    Navigate(Command),
    /// Resume playback towards the next slide
    Resume,
    /// Reset navigation and seek back to the start of the video
    Restart,
    /// Terminal was resized to `(cols, rows)`
    Resize(u16, u16),
    Quit,
}

impl Action {
    /// Whether an absent seek target should fall back to frame 0.
    ///
    /// Retreating past the first slide means "go to the very start".
    pub fn seeks_to_start_when_absent(&self) -> bool {
        matches!(
            self,
            Action::Navigate(Command::RetreatSlide) | Action::Navigate(Command::RetreatSection)
        )
    }
}
