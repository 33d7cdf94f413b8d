//! Input handling for the transport deck.
//!
//! Keyboard and mouse events map to [`Action`]s here; applying them to the
//! session is the app loop's job. The mapping depends on where the controls
//! were drawn ([`ControlRegions`]) and on whether they are visible at all:
//! a tap while the overlay is hidden only reveals it.

mod keyboard;
mod mouse;

pub use keyboard::map_key_event;
pub use mouse::map_mouse_event;

use crossterm::event::Event;

use crate::tui::render::ControlRegions;

/// A transport action requested by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Toggle between playing and paused.
    TogglePlayPause,
    /// Jump forward by the configured skip step.
    SkipForward,
    /// Jump back by the configured skip step.
    SkipBack,
    /// Seek to a fraction of the media, from a slider hit.
    Scrub(f64),
    /// Show or hide the control overlay.
    ToggleControls,
    /// Leave the player.
    Quit,
}

/// Map any input event to an action, dispatching to the appropriate handler.
///
/// # Arguments
/// * `event` - The crossterm event to map
/// * `regions` - Clickable regions from the last layout
/// * `controls_visible` - Whether the overlay is currently shown
///
/// # Returns
/// The action the gesture stands for, or `None` for unmapped input.
pub fn map_event(
    event: &Event,
    regions: ControlRegions,
    controls_visible: bool,
) -> Option<Action> {
    match event {
        Event::Key(key) => map_key_event(key),
        Event::Mouse(mouse) => map_mouse_event(mouse, regions, controls_visible),
        // Resizes redraw on the next tick; focus and paste events are ignored
        _ => None,
    }
}
