//! Playback logic for the player.
//!
//! This module holds the loop that pauses the video on slide boundaries
//! and turns navigation commands into seeks.

mod session;

pub use session::{Player, PlayerSettings};
