//! Command handlers for the CLI surface.
//!
//! Each submodule maps to one subcommand; `play` also backs the default
//! invocation with no subcommand at all.

pub mod completions;
pub mod config;
pub mod play;
