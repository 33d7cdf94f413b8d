//! Media player handle seam.
//!
//! The playback session drives the player exclusively through the
//! [`PlayerHandle`] trait: commands go down (play/pause/seek), observed state
//! comes back as snapshots (position/duration/rate/error). Time crosses this
//! boundary as plain `f64` seconds; whatever representation the player uses
//! internally stays inside the adapter.
//!
//! The one real implementation is [`MpvHandle`], which owns a spawned mpv
//! process and speaks its JSON IPC protocol.

pub mod mpv;

pub use mpv::MpvHandle;

use std::path::PathBuf;

/// A handle to the media player rendering the video surface.
///
/// Command methods are fire-and-forget: they queue the request and return
/// without waiting for the player to act on it. Query methods return the
/// last observed snapshot; `None` means the player has not reported the
/// value yet (e.g. duration before metadata loads).
pub trait PlayerHandle {
    /// Resume playback.
    fn play(&mut self) -> Result<(), HandleError>;

    /// Pause playback.
    fn pause(&mut self) -> Result<(), HandleError>;

    /// Seek to an absolute position in seconds.
    ///
    /// Out-of-range targets (negative, past the end) are passed through
    /// unclamped; the player applies its own clamping.
    fn seek(&mut self, seconds: f64) -> Result<(), HandleError>;

    /// Last observed playback position in seconds.
    fn position(&self) -> Option<f64>;

    /// Last observed media duration in seconds, once metadata is known.
    fn duration(&self) -> Option<f64>;

    /// Effective playback rate: 0.0 while paused, the speed factor otherwise.
    fn rate(&self) -> f64;

    /// Player-reported playback error, if any.
    fn error(&self) -> Option<&str>;

    /// Drain pending observed-state updates into the snapshot queries.
    ///
    /// Called once per sync tick, on the controller thread.
    fn poll(&mut self) -> Result<(), HandleError>;

    /// Release the player: stop observation, ask it to quit, reap it.
    ///
    /// Must be idempotent; also invoked from `Drop` in implementations.
    fn shutdown(&mut self) -> Result<(), HandleError>;
}

/// Errors from the player adapter.
#[derive(Debug, thiserror::Error)]
pub enum HandleError {
    #[error("Failed to start player '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Timed out waiting for the player control socket at {path}")]
    ConnectTimeout { path: PathBuf },

    #[error("Player control connection failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed player message: {0}")]
    Protocol(#[from] serde_json::Error),

    #[error("Player process exited")]
    Disconnected,
}
