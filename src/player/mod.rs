//! Playback controller module
//!
//! Keeps the transport overlay consistent with the player's asynchronous
//! state: scrubber position, remaining-time label, play/pause glyph, and
//! controls visibility.
//!
//! # Architecture
//!
//! The controller is organized into submodules:
//! - `session`: PlaybackSession owning the player handle, overlay countdown,
//!   and display state, with the periodic sync tick
//! - `seek`: whole-second seek target arithmetic (scrub and skip)
//! - `overlay`: VISIBLE/HIDDEN state machine with the single-shot hide
//!   countdown
//! - `display`: DisplayState pushed to the rendered overlay, plus
//!   remaining-time formatting
//!
//! # Usage
//!
//! ```no_run
//! use std::time::{Duration, Instant};
//! use vdeck::handle::MpvHandle;
//! use vdeck::player::PlaybackSession;
//!
//! let handle = MpvHandle::spawn("mpv", &[], "https://example.com/clip.mp4", None).unwrap();
//! let mut session = PlaybackSession::new(
//!     Box::new(handle),
//!     "clip".to_string(),
//!     Duration::from_secs(10),
//!     10.0,
//! );
//! session.attach(Instant::now());
//! loop {
//!     if session.tick(Instant::now()).unwrap() {
//!         // redraw the overlay from session.display()
//!     }
//!     # break;
//! }
//! session.close();
//! ```

pub mod display;
pub mod overlay;
pub(crate) mod seek;
pub mod session;

pub use display::{format_remaining, DisplayState, TransportGlyph};
pub use overlay::ControlsVisibility;
pub use session::PlaybackSession;
