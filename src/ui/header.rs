//! Header rendering: glitch logo, tagline, live badge and system clock.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::constants::TAGLINE;
use crate::format::format_clock;
use crate::theme::{BORDER_STYLE, LIVE_COLOR, MUTED_COLOR};

use super::scanline::glitch_spans;

/// Render the application header.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let header_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE);
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    let mut logo = vec![Span::styled("[", Style::new().fg(MUTED_COLOR))];
    logo.extend(glitch_spans("SOL", app.scanline_pos));
    logo.push(Span::styled("]", Style::new().fg(MUTED_COLOR)));
    logo.push(Span::raw("  "));
    logo.push(Span::styled(TAGLINE, Style::new().fg(MUTED_COLOR)));

    let title_paragraph = Paragraph::new(Line::from(logo)).alignment(Alignment::Left);
    let title_area = Rect::new(
        area.x + 2,
        area.y + 1,
        30.min(area.width.saturating_sub(4)),
        1,
    );
    frame.render_widget(title_paragraph, title_area);

    if area.width > 64 {
        render_status(app, frame, area);
    }
}

/// Render the live badge and system clock on the right.
fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let status = Line::from(vec![
        Span::styled("● ", Style::new().fg(LIVE_COLOR)),
        Span::styled(
            "LIVE",
            Style::new().fg(LIVE_COLOR).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("SYS_TIME: ", Style::new().fg(MUTED_COLOR)),
        Span::raw(format_clock(&app.current_time)),
    ]);

    let status_width = 28;
    let status_area = Rect::new(
        area.right().saturating_sub(status_width + 2),
        area.y + 1,
        status_width,
        1,
    );
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Right),
        status_area,
    );
}
