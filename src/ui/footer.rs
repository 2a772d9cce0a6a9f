//! Footer rendering: decorative network figures and the quit hint.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::constants::{NETWORK_NAME, NETWORK_SLOT, NETWORK_TPS};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR};

/// Renders the footer: network figures on the first row, key hint below.
///
/// The TPS and slot figures are display-only constants, not live data.
pub fn render(_app: &App, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }

    let label = Style::new().fg(MUTED_COLOR);
    let value = Style::new().fg(PRIMARY_COLOR);

    let stats = Line::from(vec![
        Span::styled("NETWORK: ", label),
        Span::styled(NETWORK_NAME, value),
        Span::styled(" | ", label),
        Span::styled("TPS: ", label),
        Span::styled(NETWORK_TPS, value),
        Span::styled(" | ", label),
        Span::styled("SLOT: ", label),
        Span::styled(NETWORK_SLOT, value),
    ]);
    let stats_area = Rect::new(area.x, area.y, area.width, 1);
    frame.render_widget(
        Paragraph::new(stats).alignment(Alignment::Center),
        stats_area,
    );

    if area.height > 1 {
        let hint = Paragraph::new("q:Quit")
            .style(Style::new().fg(MUTED_COLOR))
            .alignment(Alignment::Center);
        let hint_area = Rect::new(area.x, area.y + 1, area.width, 1);
        frame.render_widget(hint, hint_area);
    }
}
