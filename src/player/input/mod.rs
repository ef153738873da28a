//! Input handling for the player.
//!
//! Terminal events are polled through the `EventSource` trait and mapped to
//! player actions. The mapping itself is pure so it can be tested without
//! a terminal.

mod keyboard;

pub use keyboard::map_key;

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::player::state::Action;

/// Source of terminal events.
pub trait EventSource {
    /// Return the next pending event without blocking, if any.
    fn poll_event(&mut self) -> Result<Option<Event>>;
}

/// Events read from the real terminal via crossterm.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn poll_event(&mut self) -> Result<Option<Event>> {
        if event::poll(Duration::ZERO)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

/// Map any terminal event to an action.
///
/// Only key presses count; releases and repeats reported by some
/// terminals are ignored, as are focus, mouse and paste events.
pub fn map_event(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(*key),
        Event::Resize(cols, rows) => Some(Action::Resize(*cols, *rows)),
        _ => None,
    }
}
