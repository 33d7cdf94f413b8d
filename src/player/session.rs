//! Playback session: one stream, one player handle, one overlay.
//!
//! Owns every piece of per-screen mutable state (the player handle, the
//! visibility countdown, and the display state) as explicit fields, with
//! construction on surface attach and teardown in [`close`](PlaybackSession::close).
//! The sync tick, the seek entry points, and the play/pause toggle all live
//! here so the whole transport surface is drivable (and testable) without a
//! terminal or a real player.

use std::time::{Duration, Instant};

use crate::handle::{HandleError, PlayerHandle};
use crate::player::display::{format_remaining, DisplayState, TransportGlyph};
use crate::player::overlay::ControlsVisibility;
use crate::player::seek::{scrub_target, skip_target};

/// Controller state for a single playback screen.
pub struct PlaybackSession {
    handle: Box<dyn PlayerHandle>,
    overlay: ControlsVisibility,
    display: DisplayState,
    skip_step: f64,
}

impl PlaybackSession {
    /// Build a session around an attached player handle.
    ///
    /// # Arguments
    /// * `handle` - Player adapter, already spawned and speaking
    /// * `title` - Static title shown in the overlay
    /// * `hide_delay` - Controls auto-hide delay
    /// * `skip_step` - Seconds moved by one skip action
    pub fn new(
        handle: Box<dyn PlayerHandle>,
        title: String,
        hide_delay: Duration,
        skip_step: f64,
    ) -> Self {
        Self {
            handle,
            overlay: ControlsVisibility::new(hide_delay),
            display: DisplayState::new(title),
            skip_step,
        }
    }

    /// Start the auto-hide countdown; call once the screen is up.
    pub fn attach(&mut self, now: Instant) {
        self.overlay.arm(now);
    }

    /// What the overlay should currently show.
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Seconds moved by one skip action.
    pub fn skip_step(&self) -> f64 {
        self.skip_step
    }

    /// One sync tick: drain player events, refresh progress and label,
    /// check the hide countdown.
    ///
    /// Returns `true` when the display state changed and a redraw is due.
    /// A tick with no observed position yet changes nothing.
    pub fn tick(&mut self, now: Instant) -> Result<bool, HandleError> {
        self.handle.poll()?;

        let before = self.display.clone();

        if let Some(position) = self.handle.position() {
            match self.handle.duration() {
                Some(duration) if duration > 0.0 => {
                    self.display.progress = position / duration;
                    self.display.remaining = format_remaining(duration - position);
                }
                _ => {
                    // Metadata not in yet: raw seconds on the slider, label untouched
                    self.display.progress = position;
                }
            }
        }

        self.overlay.poll(now);
        self.display.controls_visible = self.overlay.is_visible();

        Ok(self.display != before)
    }

    /// Effective playing state: nonzero rate and no player error.
    ///
    /// An error forces "not playing" regardless of rate, so the next toggle
    /// issues play rather than pause.
    pub fn is_playing(&self) -> bool {
        self.handle.rate() != 0.0 && self.handle.error().is_none()
    }

    /// Play/pause toggle. Flips the glyph as part of the action.
    pub fn toggle_play_pause(&mut self, now: Instant) -> Result<(), HandleError> {
        self.overlay.note_activity(now);
        if self.is_playing() {
            self.handle.pause()?;
            self.display.glyph = TransportGlyph::Play;
        } else {
            self.handle.play()?;
            self.display.glyph = TransportGlyph::Pause;
        }
        Ok(())
    }

    /// Scrub: seek to `ratio` of the total duration, whole seconds.
    ///
    /// No-op while the duration is unknown. Fire-and-forget: rapid scrubs
    /// simply overwrite each other at the player.
    pub fn scrub_to(&mut self, ratio: f64, now: Instant) -> Result<(), HandleError> {
        self.overlay.note_activity(now);
        let duration = match self.handle.duration() {
            Some(d) if d > 0.0 => d,
            _ => return Ok(()),
        };
        self.handle.seek(scrub_target(ratio, duration))
    }

    /// Skip forward by the configured step.
    pub fn skip_forward(&mut self, now: Instant) -> Result<(), HandleError> {
        self.skip(self.skip_step, now)
    }

    /// Skip backward by the configured step.
    pub fn skip_back(&mut self, now: Instant) -> Result<(), HandleError> {
        self.skip(-self.skip_step, now)
    }

    /// Seek `delta` seconds from the current observed position.
    ///
    /// The target is not clamped to [0, duration]; the player handles
    /// out-of-range seeks itself. No-op while position is unobserved.
    pub fn skip(&mut self, delta: f64, now: Instant) -> Result<(), HandleError> {
        self.overlay.note_activity(now);
        let position = match self.handle.position() {
            Some(p) => p,
            None => return Ok(()),
        };
        self.handle.seek(skip_target(position, delta))
    }

    /// Tap anywhere: toggle overlay visibility and restart the countdown.
    pub fn toggle_controls(&mut self, now: Instant) {
        self.overlay.toggle(now);
        self.display.controls_visible = self.overlay.is_visible();
    }

    /// Tear the session down: cancel the countdown, release the player.
    pub fn close(&mut self) {
        self.overlay.cancel();
        if let Err(e) = self.handle.shutdown() {
            tracing::warn!("Player shutdown reported an error: {}", e);
        }
    }
}
