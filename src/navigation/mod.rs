//! Slide navigation state machine.
//!
//! Tracks the slide currently shown and the slide forward playback should
//! pause at, and turns navigation commands into seek targets.
//!
//! # Module Structure
//!
//! - `state`: `NavState`, the three legal `(current, next)` shapes
//! - `command`: `Command` and its pure transition function
//! - `navigator`: `Navigator`, the session-owned state plus shared index
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use anime_presenter::markup::Markup;
//! use anime_presenter::navigation::{Command, Navigator};
//! use anime_presenter::presentation::PresentationIndex;
//!
//! let markup = Markup::from_yaml("talk.yaml").unwrap();
//! let index = Arc::new(PresentationIndex::from_markup(&markup).unwrap());
//! let mut nav = Navigator::new(index);
//! if let Some(frame) = nav.apply(Command::AdvanceSlide) {
//!     println!("seek to frame {}", frame);
//! }
//! ```

mod command;
mod navigator;
mod state;

pub use command::Command;
pub use navigator::Navigator;
pub use state::{NavState, NavigationError};
