//! anime-presenter - slide-synchronized video presentations
//!
//! A presenter writes a YAML markup file naming a video and an ordered list
//! of sections and slides, each anchored to a frame offset. The player runs
//! the video forward, pauses at every slide boundary and lets the presenter
//! step by slide or by section.
//!
//! - [`markup`]: loading and validating the markup file
//! - [`presentation`]: the ordered slide index
//! - [`navigation`]: the current/next slide state machine
//! - [`player`]: the playback loop, input mapping and terminal preview
//! - [`config`]: user configuration

pub mod cli;
pub mod config;
pub mod markup;
pub mod navigation;
pub mod player;
pub mod presentation;

pub use config::Config;
pub use markup::{Markup, MarkupError};
pub use navigation::{Command, NavState, Navigator};
pub use presentation::{PresentationError, PresentationIndex, Slide, SlideId};
