//! vdeck - terminal transport deck for mpv
//!
//! The video renders in mpv's own window; vdeck owns the terminal and
//! drives the player over its JSON IPC socket: play/pause, absolute
//! seeks, skips, and a controls overlay that auto-hides after inactivity.
//!
//! The crate splits into:
//! - [`handle`]: the player process seam (spawn, IPC, observed state)
//! - [`player`]: the playback session (sync tick, seek math, overlay timer)
//! - [`tui`]: the terminal control surface (rendering, input, app loop)
//! - [`config`]: configuration loading and migration

pub mod cli;
pub mod config;
pub mod handle;
pub mod player;
pub mod tui;

pub use config::Config;

/// Version string with git and build metadata, e.g. `0.1.0 (1a2b3c4 2026-08-22)`.
pub fn version_string() -> String {
    format!(
        "{} ({} {})",
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
        env!("VDECK_BUILD_DATE")
    )
}
