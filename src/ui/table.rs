//! Title block and the token table with its staggered row reveal.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::app::App;
use crate::constants::{SUBTITLE, TITLE_HEIGHT};
use crate::format::{format_change, format_magnitude, format_price, format_rank};
use crate::theme::{
    ACCENT_COLOR, BORDER_STYLE, MUTED_COLOR, NEGATIVE_COLOR, POSITIVE_COLOR, PRIMARY_COLOR,
    SYMBOL_STYLE, TABLE_HEADER_STYLE,
};
use crate::tokens::Token;

use super::scanline::glitch_spans;

/// Render the title block and the token table.
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .constraints([Constraint::Length(TITLE_HEIGHT), Constraint::Min(4)])
        .split(area);

    render_title(app, frame, chunks[0]);
    render_table(app, frame, chunks[1]);
}

fn render_title(app: &App, frame: &mut Frame, area: Rect) {
    let title_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE);
    frame.render_widget(title_block, area);

    if area.height <= 2 {
        return;
    }

    let mut heading = glitch_spans("TOP 10 SOLANA", app.scanline_pos);
    heading.push(Span::styled(
        " TOKENS",
        Style::new().fg(ACCENT_COLOR).add_modifier(Modifier::BOLD),
    ));
    let heading_area = Rect::new(
        area.x + 2,
        area.y + 1,
        22.min(area.width.saturating_sub(4)),
        1,
    );
    frame.render_widget(Paragraph::new(Line::from(heading)), heading_area);

    if area.width > 70 {
        let subtitle = Paragraph::new(SUBTITLE)
            .style(Style::new().fg(MUTED_COLOR))
            .alignment(Alignment::Right);
        let subtitle_width = SUBTITLE.len() as u16;
        let subtitle_area = Rect::new(
            area.right().saturating_sub(subtitle_width + 2),
            area.y + 1,
            subtitle_width,
            1,
        );
        frame.render_widget(subtitle, subtitle_area);
    }
}

fn render_table(app: &App, frame: &mut Frame, area: Rect) {
    let table_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
        .title(Line::from(vec![
            Span::styled(" > QUERY_RESULT ", Style::new().fg(PRIMARY_COLOR)),
            Span::styled(
                format!("[{} RECORDS] ", app.tokens.len()),
                Style::new().fg(MUTED_COLOR),
            ),
        ]));

    let header = Row::new(vec!["#", "TOKEN", "PRICE", "24H", "MCAP", "VOL"])
        .style(TABLE_HEADER_STYLE)
        .bottom_margin(1);

    let rows = app.tokens.iter().enumerate().map(|(index, token)| {
        if app.is_revealed(index) {
            token_row(token)
        } else {
            // Keep the slot so the layout doesn't jump while rows cascade in.
            Row::new(vec![Cell::from(""); 6])
        }
    });

    let widths = [
        Constraint::Length(4),
        Constraint::Min(18),
        Constraint::Length(12),
        Constraint::Length(9),
        Constraint::Length(10),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(table_block)
        .column_spacing(1);
    frame.render_widget(table, area);
}

fn token_row(token: &Token) -> Row<'static> {
    let change_style = if token.change_24h >= 0.0 {
        Style::new().fg(POSITIVE_COLOR)
    } else {
        Style::new().fg(NEGATIVE_COLOR)
    };

    Row::new(vec![
        Cell::from(Span::styled(
            format_rank(token.rank),
            Style::new().fg(MUTED_COLOR),
        )),
        Cell::from(Line::from(vec![
            Span::styled(token.symbol, SYMBOL_STYLE),
            Span::raw(" "),
            Span::styled(token.name, Style::new().fg(MUTED_COLOR)),
        ])),
        numeric_cell(format_price(token.price), Style::new()),
        numeric_cell(format_change(token.change_24h), change_style),
        numeric_cell(format_magnitude(token.market_cap), Style::new()),
        numeric_cell(
            format_magnitude(token.volume_24h),
            Style::new().fg(MUTED_COLOR),
        ),
    ])
}

fn numeric_cell(value: String, style: Style) -> Cell<'static> {
    Cell::from(Text::from(Line::from(Span::styled(value, style))).alignment(Alignment::Right))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Action;
    use crate::test_utils::buffer_to_string;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw_section(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(app, frame, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_title_and_query_bar() {
        let app = App::new(true);
        let content = draw_section(&app, 110, 25);

        assert!(content.contains("TOP 10 SOLANA"));
        assert!(content.contains("TOKENS"));
        assert!(content.contains("// MARKET_DATA_STREAM :: REALTIME_FEED"));
        assert!(content.contains("> QUERY_RESULT"));
        assert!(content.contains("[10 RECORDS]"));
    }

    #[test]
    fn test_column_headers() {
        let app = App::new(true);
        let content = draw_section(&app, 110, 25);

        for column in ["#", "TOKEN", "PRICE", "24H", "MCAP", "VOL"] {
            assert!(content.contains(column), "missing column {column}");
        }
    }

    #[test]
    fn test_rows_render_formatted_values() {
        let mut app = App::new(true);
        for index in 0..app.tokens.len() {
            app.update(Action::RevealRow(index));
        }
        let content = draw_section(&app, 110, 25);

        // Rank padding, price tiers, signed change, magnitude suffixes.
        assert!(content.contains("01"));
        assert!(content.contains("10"));
        assert!(content.contains("$0.000028"));
        assert!(content.contains("$0.4200"));
        assert!(content.contains("+8.92%"));
        assert!(content.contains("-2.45%"));
        assert!(content.contains("$82.50B"));
        assert!(content.contains("$456M"));
    }

    #[test]
    fn test_unrevealed_rows_leave_blank_slots() {
        let mut app = App::new(true);
        app.update(Action::RevealRow(0));
        let content = draw_section(&app, 110, 25);

        assert!(content.contains("Solana"));
        assert!(!content.contains("Jupiter"));
        assert!(!content.contains("JUP"));
    }
}
