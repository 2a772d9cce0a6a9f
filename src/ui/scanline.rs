//! Scanline overlay and glitch text effects.
//!
//! Both are purely decorative. The overlay tints one row of the frame,
//! sweeping top to bottom as the scan position advances; glitch text
//! flares a single character of a label at a time.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
};

use crate::app::App;
use crate::constants::SCANLINE_WRAP;
use crate::theme::{ACCENT_COLOR, PRIMARY_COLOR, SCANLINE_STYLE};

/// Scan ticks the glitch flare lingers on one character.
const GLITCH_DWELL: u16 = 7;

/// Tints the row the scanline is currently crossing. Drawn after all
/// other widgets so it sweeps over the whole frame.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let row = Rect::new(
        area.x,
        area.y + scan_offset(area.height, app.scanline_pos),
        area.width,
        1,
    );
    frame.buffer_mut().set_style(row, SCANLINE_STYLE);
}

/// Maps a scan position in `0..SCANLINE_WRAP` onto a row offset within a
/// frame of the given height. Always lands inside the frame.
fn scan_offset(height: u16, pos: u16) -> u16 {
    let offset = (u32::from(height) * u32::from(pos) / u32::from(SCANLINE_WRAP)) as u16;
    offset.min(height - 1)
}

/// Builds spans for `text` with a travelling glitch flare.
///
/// One character at a time takes the accent color; the flare hops to the
/// next character as the scan position advances, which reads as a
/// flicker once the scanline ticker drives it.
pub fn glitch_spans(text: &str, phase: u16) -> Vec<Span<'static>> {
    let base = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);
    let flare = Style::new().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD);

    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return Vec::new();
    }
    let hot = usize::from(phase / GLITCH_DWELL) % chars.len();

    chars
        .into_iter()
        .enumerate()
        .map(|(index, c)| {
            let style = if index == hot { flare } else { base };
            Span::styled(c.to_string(), style)
        })
        .collect()
}
