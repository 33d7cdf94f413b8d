//! Transport deck application loop.
//!
//! Keys:
//! - Space: play/pause
//! - Left/Right: skip back/forward
//! - c or Enter: show/hide the controls
//! - q, Esc or Ctrl-C: quit
//!
//! Mouse taps hit-test against the rendered controls; while the overlay is
//! hidden a tap only reveals it. The loop wakes on input or on the sync
//! tick, whichever comes first, and redraws only when something changed.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{info, warn};

use crate::handle::HandleError;
use crate::player::PlaybackSession;
use crate::tui::input::{map_event, Action};
use crate::tui::render;
use crate::tui::theme::Theme;

/// Control flow signal from input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
}

/// The single-screen transport application.
pub struct PlayerApp {
    session: PlaybackSession,
    theme: Theme,
    tick: Duration,
}

impl PlayerApp {
    pub fn new(session: PlaybackSession, theme: Theme, tick: Duration) -> Self {
        Self {
            session,
            theme,
            tick,
        }
    }

    /// Run the deck until the user quits or the player goes away.
    ///
    /// Owns the terminal for the duration: raw mode, alternate screen and
    /// mouse capture on entry, all restored before returning. The session
    /// is closed on the way out, releasing the player process.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = init_terminal()?;
        self.session.attach(Instant::now());

        let result = self.event_loop(&mut terminal);

        restore_terminal(&mut terminal)?;
        self.session.close();
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let mut last_tick = Instant::now();
        let mut needs_render = true;

        loop {
            if needs_render {
                terminal.draw(|frame| {
                    render::render_frame(
                        frame,
                        self.session.display(),
                        self.session.skip_step(),
                        &self.theme,
                    )
                })?;
                needs_render = false;
            }

            let timeout = self.tick.saturating_sub(last_tick.elapsed());
            if event::poll(timeout).context("poll terminal events")? {
                let event = event::read().context("read terminal event")?;
                let size = terminal.size().context("query terminal size")?;
                let regions =
                    render::control_regions(Rect::new(0, 0, size.width, size.height));

                let visible = self.session.display().controls_visible;
                if let Some(action) = map_event(&event, regions, visible) {
                    match self.apply_action(action, Instant::now()) {
                        Ok(InputResult::Quit) => return Ok(()),
                        Ok(InputResult::Continue) => needs_render = true,
                        Err(HandleError::Disconnected) => {
                            info!("Player went away, leaving the deck");
                            return Ok(());
                        }
                        // A failed transport command is not fatal; the next
                        // tick resyncs the overlay with whatever mpv did
                        Err(e) => {
                            warn!("Player command failed: {}", e);
                            needs_render = true;
                        }
                    }
                } else if matches!(event, Event::Resize(..)) {
                    needs_render = true;
                }
            }

            if last_tick.elapsed() >= self.tick {
                last_tick = Instant::now();
                match self.session.tick(Instant::now()) {
                    Ok(changed) => needs_render = needs_render || changed,
                    // The player window was closed out from under us; that
                    // ends the session, not the program with an error
                    Err(HandleError::Disconnected) => {
                        info!("Player went away, leaving the deck");
                        return Ok(());
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }

    /// Apply one mapped action to the session.
    fn apply_action(&mut self, action: Action, now: Instant) -> Result<InputResult, HandleError> {
        match action {
            Action::TogglePlayPause => self.session.toggle_play_pause(now)?,
            Action::SkipForward => self.session.skip_forward(now)?,
            Action::SkipBack => self.session.skip_back(now)?,
            Action::Scrub(ratio) => self.session.scrub_to(ratio, now)?,
            Action::ToggleControls => self.session.toggle_controls(now),
            Action::Quit => return Ok(InputResult::Quit),
        }
        Ok(InputResult::Continue)
    }
}

fn init_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("create terminal")?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
    Ok(())
}
