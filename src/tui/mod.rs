//! TUI (Text User Interface) module for vdeck
//!
//! The terminal-side control surface: frame rendering, input mapping and
//! the application loop, built on ratatui/crossterm. The video itself never
//! renders here; the player process owns its own window.

pub mod app;
pub mod input;
pub mod render;
pub mod theme;

// Re-export the app and shared types for commands and external use
pub use app::{InputResult, PlayerApp};
pub use input::Action;
pub use theme::{current_theme, Theme};
