//! Seek target arithmetic.
//!
//! Targets are expressed at whole-second granularity: the slider maps to
//! `ratio × duration` and skips to `position ± step`, both truncated toward
//! zero before the command is issued. Sub-second seek precision is
//! intentionally discarded; range clamping is left to the player.

/// Absolute target for a scrub to `ratio` of `duration`, whole seconds.
pub fn scrub_target(ratio: f64, duration: f64) -> f64 {
    (ratio * duration).trunc()
}

/// Absolute target for a skip of `delta` seconds from `position`.
///
/// May be negative or past the end; the player clamps.
pub fn skip_target(position: f64, delta: f64) -> f64 {
    (position + delta).trunc()
}
