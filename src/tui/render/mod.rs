//! Frame rendering for the transport overlay.
//!
//! The video itself plays in the player's own window; this frame is the
//! control surface. Everything hangs off one visibility flag: when the
//! controls are hidden the frame stays blank.
//!
//! Layout, top to bottom: title line, dead space, then a four-row control
//! block (separator, slider with the remaining-time label, transport
//! buttons, key hints). [`control_regions`] exposes where the clickable
//! pieces land so mouse input can hit-test against the same coordinates
//! the renderer used.

pub mod slider;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::player::DisplayState;
use crate::tui::theme::Theme;

/// Rows taken by the control block at the bottom of the frame.
pub const CONTROL_ROWS: u16 = 4;

/// Smallest terminal the overlay renders into sensibly.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 6;

/// Horizontal margin around the control block.
const MARGIN: u16 = 2;

/// Width of the remaining-time label plus its leading space (" MM:SS").
const TIME_LABEL_WIDTH: u16 = 6;

/// Width of the centered button cluster: back, play/pause, forward.
const CLUSTER_WIDTH: u16 = 11;

/// Clickable regions of the control block, in terminal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRegions {
    pub slider: Rect,
    pub play: Rect,
    pub back: Rect,
    pub forward: Rect,
}

struct FrameChunks {
    title: Rect,
    separator: Rect,
    slider_row: Rect,
    buttons: Rect,
    hints: Rect,
}

fn split_frame(area: Rect) -> FrameChunks {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Min(0),    // dead space; the video lives in the player window
            Constraint::Length(1), // separator
            Constraint::Length(1), // slider + remaining time
            Constraint::Length(1), // transport buttons
            Constraint::Length(1), // key hints
        ])
        .split(area);
    FrameChunks {
        title: chunks[0],
        separator: chunks[2],
        slider_row: chunks[3],
        buttons: chunks[4],
        hints: chunks[5],
    }
}

fn inset(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y,
        width: area.width.saturating_sub(margin * 2),
        height: area.height,
    }
}

/// The slider's cell range within its row, label space excluded.
fn slider_rect(row: Rect) -> Rect {
    let inner = inset(row, MARGIN);
    Rect {
        width: inner.width.saturating_sub(TIME_LABEL_WIDTH),
        ..inner
    }
}

/// Where the button cluster starts within its row.
fn cluster_origin(row: Rect) -> u16 {
    row.x + row.width.saturating_sub(CLUSTER_WIDTH) / 2
}

/// Compute the clickable regions for a frame of the given size.
///
/// Button regions are padded one cell to each side so the single-glyph
/// targets are hittable.
pub fn control_regions(area: Rect) -> ControlRegions {
    let chunks = split_frame(area);
    let cluster_x = cluster_origin(chunks.buttons);
    let button = |offset: u16| {
        Rect::new(
            (cluster_x + offset).saturating_sub(1),
            chunks.buttons.y,
            3,
            1,
        )
    };
    ControlRegions {
        slider: slider_rect(chunks.slider_row),
        back: button(0),
        play: button(5),
        forward: button(10),
    }
}

/// Render one frame of the control surface.
///
/// A hidden overlay renders nothing at all; the cleared frame is the
/// "hidden" picture.
pub fn render_frame(frame: &mut Frame, display: &DisplayState, skip_step: f64, theme: &Theme) {
    if !display.controls_visible {
        return;
    }

    let chunks = split_frame(frame.area());
    render_title(frame, chunks.title, &display.title, theme);
    render_separator(frame, chunks.separator, theme);
    render_transport_row(frame, chunks.slider_row, display, theme);
    render_buttons(frame, chunks.buttons, display, theme);
    render_hints(frame, chunks.hints, skip_step, theme);
}

fn render_title(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
    let max = area.width.saturating_sub(MARGIN * 2) as usize;
    let text = truncate_to_width(title, max);
    let line = Line::from(Span::styled(text, theme.text_style()));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
    let rule = "─".repeat(area.width as usize);
    let line = Line::from(Span::styled(rule, theme.text_secondary_style()));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_transport_row(frame: &mut Frame, area: Rect, display: &DisplayState, theme: &Theme) {
    let inner = inset(area, MARGIN);
    let bar_width = slider_rect(area).width as usize;
    let mut line = slider::slider_line(bar_width, display.progress, theme);
    line.spans.push(Span::raw(" "));
    line.spans
        .push(Span::styled(display.remaining.clone(), theme.text_style()));
    frame.render_widget(Paragraph::new(line), inner);
}

fn render_buttons(frame: &mut Frame, area: Rect, display: &DisplayState, theme: &Theme) {
    let line = Line::from(vec![
        Span::styled("«", theme.accent_style()),
        Span::raw("    "),
        Span::styled(display.glyph.symbol(), theme.accent_bold_style()),
        Span::raw("    "),
        Span::styled("»", theme.accent_style()),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_hints(frame: &mut Frame, area: Rect, skip_step: f64, theme: &Theme) {
    let skip = format!("skip {}", format_skip_step(skip_step));
    let keys: [(&str, &str); 4] = [
        ("space", "play/pause"),
        ("←/→", &skip),
        ("c", "controls"),
        ("q", "quit"),
    ];

    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", theme.text_secondary_style()));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            theme.text_secondary_style(),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Format the skip step for the hint bar ("10s", "2.5s").
fn format_skip_step(step: f64) -> String {
    if step.fract() == 0.0 {
        format!("{}s", step as i64)
    } else {
        format!("{:.1}s", step)
    }
}

/// Truncate to a display width, appending an ellipsis when cut.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
