//! Controls visibility state machine.
//!
//! Two states, VISIBLE and HIDDEN, driven by a single-shot countdown. A tap
//! toggles the state in either direction and restarts the countdown; any
//! other qualifying input restarts it without toggling. When the countdown
//! expires the overlay hides itself. At most one deadline is pending at a
//! time: rescheduling replaces it.

use std::time::{Duration, Instant};

/// Visibility state for the whole transport overlay.
///
/// The countdown is a stored deadline checked from the session tick, not an
/// OS timer, so teardown cannot leak a pending callback.
#[derive(Debug)]
pub struct ControlsVisibility {
    visible: bool,
    hide_deadline: Option<Instant>,
    hide_delay: Duration,
}

impl ControlsVisibility {
    /// Start VISIBLE with no countdown pending.
    ///
    /// The countdown is armed separately once the video surface is attached,
    /// via [`arm`](Self::arm).
    pub fn new(hide_delay: Duration) -> Self {
        Self {
            visible: true,
            hide_deadline: None,
            hide_delay,
        }
    }

    /// Whether the overlay elements are currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Schedule (or reschedule) the auto-hide countdown from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.hide_deadline = Some(now + self.hide_delay);
    }

    /// Tap anywhere: flip visibility and restart the countdown.
    pub fn toggle(&mut self, now: Instant) {
        self.visible = !self.visible;
        self.arm(now);
    }

    /// Qualifying non-tap input (transport key, scrub, skip): restart the
    /// countdown without changing visibility.
    pub fn note_activity(&mut self, now: Instant) {
        self.arm(now);
    }

    /// Check the pending deadline against `now`.
    ///
    /// Returns `true` when the overlay transitioned to HIDDEN on this call.
    /// An expired deadline while already hidden is consumed silently.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.hide_deadline {
            Some(deadline) if now >= deadline => {
                self.hide_deadline = None;
                if self.visible {
                    self.visible = false;
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Drop any pending countdown (session teardown).
    pub fn cancel(&mut self) {
        self.hide_deadline = None;
    }
}
