//! Seek slider rendering.
//!
//! Turns the session's progress ratio into a one-row slider with a knob at
//! the playhead. The ratio is clamped here for display only; seek math
//! upstream works on the unclamped value.

use ratatui::text::{Line, Span};

use crate::tui::theme::Theme;

/// Build the slider character array.
///
/// # Arguments
/// * `bar_width` - Width of the slider in characters
/// * `ratio` - Progress ratio, clamped to 0.0..=1.0 for display
///
/// # Returns
/// A tuple of (bar_chars, filled_count) where bar_chars contains the visual
/// representation and filled_count is the number of filled positions.
pub fn build_slider_chars(bar_width: usize, ratio: f64) -> (Vec<char>, usize) {
    let clamped = ratio.clamp(0.0, 1.0);
    let filled = (bar_width as f64 * clamped) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];
    for slot in bar.iter_mut().take(filled) {
        *slot = '━';
    }
    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Build the styled slider line: filled track, knob, empty track.
pub fn slider_line(bar_width: usize, ratio: f64, theme: &Theme) -> Line<'static> {
    let (bar, filled) = build_slider_chars(bar_width, ratio);

    let filled_part: String = bar[..filled].iter().collect();
    let knob_part: String = bar.get(filled).map(char::to_string).unwrap_or_default();
    let empty_part: String = bar.iter().skip(filled + 1).collect();

    Line::from(vec![
        Span::styled(filled_part, theme.accent_style()),
        Span::styled(knob_part, theme.accent_bold_style()),
        Span::styled(empty_part, theme.text_secondary_style()),
    ])
}
