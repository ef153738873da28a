//! Keyboard input mapping for the player.
//!
//! Maps key presses to player actions. Unbound keys map to `None`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::navigation::Command;
use crate::player::state::Action;

/// Map a key event to an action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),

        // === Playback ===
        KeyCode::Char(' ') => Some(Action::Resume),
        KeyCode::Char('r') => Some(Action::Restart),

        // === Slide / section navigation ===
        KeyCode::Right if shift => Some(Action::Navigate(Command::AdvanceSection)),
        KeyCode::Left if shift => Some(Action::Navigate(Command::RetreatSection)),
        KeyCode::Right => Some(Action::Navigate(Command::AdvanceSlide)),
        KeyCode::Left => Some(Action::Navigate(Command::RetreatSlide)),

        // === Jumps ===
        KeyCode::Char('b') | KeyCode::Home => Some(Action::Navigate(Command::ToFirst)),
        KeyCode::Char('e') | KeyCode::End => Some(Action::Navigate(Command::ToLast)),

        _ => None,
    }
}
