//! Slide-synchronized player
//!
//! Plays a video forward until the next slide boundary, pauses there, and
//! lets the presenter step by slide or by section.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: shared types (`Action`, `InputResult`)
//! - `backend`: the `VideoBackend` trait the loop drives
//! - `clock`: `ClockVideo`, a terminal preview backend
//! - `input/`: event polling and key mapping
//! - `playback/`: the `Player` loop and its sync policy
//! - `render/`: caption, status bar and screen drawing
//! - `terminal`: raw-mode guard for the preview
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use anime_presenter::navigation::Navigator;
//! use anime_presenter::player::{ClockVideo, Player, PlayerSettings, TerminalEvents};
//! use anime_presenter::presentation::PresentationIndex;
//! # let index: PresentationIndex = unimplemented!();
//!
//! let video = ClockVideo::new(std::io::stdout(), 25.0, 80, 24);
//! let navigator = Navigator::new(Arc::new(index));
//! let mut player = Player::new(video, navigator, "My Talk", PlayerSettings::default());
//! player.open().unwrap();
//! player.run(&mut TerminalEvents).unwrap();
//! ```

mod backend;
mod clock;
pub mod input;
pub mod playback;
pub mod render;
pub mod state;
mod terminal;

pub use backend::VideoBackend;
pub use clock::ClockVideo;
pub use input::{EventSource, TerminalEvents};
pub use playback::{Player, PlayerSettings};
pub use state::{Action, InputResult};
pub use terminal::TerminalGuard;
