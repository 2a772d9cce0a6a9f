//! UI rendering for the soltrack dashboard.
//!
//! The frame splits vertically into header, main content and footer; the
//! scanline overlay is drawn last so its tint sweeps across every section.

mod footer;
mod header;
mod scanline;
mod table;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::app::App;
use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};

/// Render the entire application UI.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    let chunks = Layout::default()
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    header::render(app, frame, chunks[0]);
    table::render(app, frame, chunks[1]);
    footer::render(app, frame, chunks[2]);

    if app.effects_enabled {
        scanline::render(app, frame, area);
    }
}
