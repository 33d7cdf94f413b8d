//! Mouse input mapping for the transport deck.
//!
//! Left clicks hit-test against the rendered control regions: the slider
//! turns the clicked column into a scrub ratio, the transport buttons map
//! to their actions, and anything else counts as a tap on the surface,
//! which toggles the overlay.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::Action;
use crate::tui::render::ControlRegions;

/// Map a mouse event to a transport action.
///
/// While the overlay is hidden every tap just reveals it; the hidden
/// controls are not hittable.
pub fn map_mouse_event(
    mouse: &MouseEvent,
    regions: ControlRegions,
    controls_visible: bool,
) -> Option<Action> {
    if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
        return None;
    }

    if !controls_visible {
        return Some(Action::ToggleControls);
    }

    let position = Position::new(mouse.column, mouse.row);
    if regions.slider.contains(position) {
        return Some(Action::Scrub(slider_ratio(mouse.column, regions.slider)));
    }
    if regions.play.contains(position) {
        return Some(Action::TogglePlayPause);
    }
    if regions.back.contains(position) {
        return Some(Action::SkipBack);
    }
    if regions.forward.contains(position) {
        return Some(Action::SkipForward);
    }

    Some(Action::ToggleControls)
}

/// Turn a clicked column into a ratio along the slider track.
///
/// Both rails are reachable: the first cell is 0.0, the last is 1.0.
fn slider_ratio(column: u16, slider: Rect) -> f64 {
    if slider.width <= 1 {
        return 0.0;
    }
    let offset = column.saturating_sub(slider.x) as f64;
    (offset / (slider.width - 1) as f64).clamp(0.0, 1.0)
}
