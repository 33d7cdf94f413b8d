//! Keyboard input mapping for the transport deck.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Action;

/// Map a keyboard event to a transport action.
pub fn map_key_event(key: &KeyEvent) -> Option<Action> {
    match key.code {
        // === Quit ===
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Quit),

        // === Playback controls ===
        KeyCode::Char(' ') => Some(Action::TogglePlayPause),
        KeyCode::Left => Some(Action::SkipBack),
        KeyCode::Right => Some(Action::SkipForward),

        // === Overlay ===
        KeyCode::Char('c') => Some(Action::ToggleControls),
        KeyCode::Enter => Some(Action::ToggleControls),

        _ => None,
    }
}
