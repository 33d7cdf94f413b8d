//! Display state pushed to the transport overlay.
//!
//! The playback session owns one [`DisplayState`] and rewrites it on every
//! clock tick and transport action. The TUI renders from this struct and
//! nothing else, so everything the overlay shows is testable without a
//! terminal.

/// Icon shown on the play/pause control.
///
/// The glyph flips as part of the toggle action itself, not from observed
/// player state: pressing play shows the pause glyph, pressing pause shows
/// the play glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportGlyph {
    /// Playback is (or is about to be) paused; pressing acts as "play".
    Play,
    /// Playback is running; pressing acts as "pause".
    Pause,
}

impl TransportGlyph {
    /// The character rendered on the control (double-width in most fonts).
    pub fn symbol(&self) -> &'static str {
        match self {
            TransportGlyph::Play => "▶",
            TransportGlyph::Pause => "⏸",
        }
    }
}

/// Everything the overlay renders, recomputed by the session.
///
/// `progress` is a ratio in [0,1] while the stream duration is known. Before
/// metadata arrives it falls back to raw playback seconds; the slider
/// saturates at full-scale in that case rather than erroring.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    /// Slider value: ProgressRatio, or raw seconds while duration is unknown.
    pub progress: f64,
    /// Remaining-time label, "MM:SS".
    pub remaining: String,
    /// Current play/pause icon.
    pub glyph: TransportGlyph,
    /// Shared visibility flag for every overlay element.
    pub controls_visible: bool,
    /// Static stream title, set once at session construction.
    pub title: String,
}

impl DisplayState {
    /// Initial overlay contents: paused, controls visible, no time known yet.
    pub fn new(title: String) -> Self {
        Self {
            progress: 0.0,
            remaining: String::from("--:--"),
            glyph: TransportGlyph::Play,
            controls_visible: true,
            title,
        }
    }
}

/// Format a remaining-time value as "MM:SS".
///
/// Fractional seconds are floored, so 0.6s remaining reads "00:00" and
/// 119.6s reads "01:59". Negative inputs (possible transiently around a
/// seek) collapse to zero via the unsigned cast.
///
/// # Arguments
/// * `seconds` - Remaining time in seconds
///
/// # Returns
/// Two-digit zero-padded minutes and seconds, e.g. "02:00"
pub fn format_remaining(seconds: f64) -> String {
    let total_secs = seconds as u64;
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{:02}:{:02}", mins, secs)
}
