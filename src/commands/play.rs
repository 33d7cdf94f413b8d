//! Play command handler
//!
//! Preflights the terminal, resolves playback options from flags and
//! config, launches mpv for the URL, and hands the terminal over to the
//! transport deck until the user quits or the player goes away.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use tracing::{info, warn};

use vdeck::config::DEFAULT_MEDIA_URL;
use vdeck::handle::MpvHandle;
use vdeck::player::PlaybackSession;
use vdeck::tui::render::{MIN_COLS, MIN_ROWS};
use vdeck::tui::{PlayerApp, Theme};
use vdeck::Config;

/// Run playback for `url`, with CLI overrides applied on top of config.
pub fn handle_play(
    url: Option<String>,
    mpv_override: Option<String>,
    hide_delay_override: Option<f64>,
    skip_override: Option<f64>,
) -> Result<()> {
    let config = Config::load()?;

    if !atty::is(atty::Stream::Stdout) {
        bail!("vdeck needs an interactive terminal (stdout is not a TTY)");
    }
    if let Some((terminal_size::Width(cols), terminal_size::Height(rows))) =
        terminal_size::terminal_size()
    {
        if cols < MIN_COLS || rows < MIN_ROWS {
            bail!(
                "Terminal too small: {}x{} (need at least {}x{})",
                cols,
                rows,
                MIN_COLS,
                MIN_ROWS
            );
        }
    }

    let url = url
        .or_else(|| config.playback.default_url.clone())
        .unwrap_or_else(|| DEFAULT_MEDIA_URL.to_string());
    let binary = mpv_override.unwrap_or_else(|| config.mpv.binary.clone());
    let hide_delay = hide_delay_override
        .map(|secs| Duration::from_secs_f64(secs.max(0.0)))
        .unwrap_or_else(|| config.playback.hide_delay());
    let skip_step = skip_override.unwrap_or(config.playback.skip_secs);

    let theme = match Theme::from_name(&config.ui.theme) {
        Some(theme) => theme,
        None => {
            warn!("Unknown theme '{}' in config, using the default", config.ui.theme);
            Theme::default()
        }
    };

    // Ctrl-C before the deck takes the terminal must still tear mpv down;
    // once raw mode is on it arrives as an ordinary key event instead
    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let flag = interrupted.clone();
        ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst))
            .context("Failed to install interrupt handler")?;
    }

    info!("Launching {} for {}", binary, url);
    let handle = MpvHandle::spawn(&binary, &config.mpv.extra_args, &url, None)
        .with_context(|| format!("Failed to launch '{}'", binary))?;

    if interrupted.load(Ordering::SeqCst) {
        drop(handle);
        bail!("Interrupted");
    }

    let session = PlaybackSession::new(
        Box::new(handle),
        media_title(&url),
        hide_delay,
        skip_step,
    );
    let mut app = PlayerApp::new(session, theme, config.playback.tick_interval());
    app.run()
}

/// Derive a display title from the URL: the last path segment, query and
/// fragment stripped.
fn media_title(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
    let name = last.split(['?', '#']).next().unwrap_or(last);
    if name.is_empty() {
        url.to_string()
    } else {
        name.to_string()
    }
}
