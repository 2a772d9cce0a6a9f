//! Theme and styling constants for the soltrack TUI.
//!
//! Phosphor-terminal palette: green chrome with magenta glitch accents.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Primary accent color - chrome and highlighted values.
pub const PRIMARY_COLOR: Color = Color::Green;

/// Accent color for glitch flares.
pub const ACCENT_COLOR: Color = Color::Magenta;

/// Positive 24-hour change.
pub const POSITIVE_COLOR: Color = Color::Green;

/// Negative 24-hour change.
pub const NEGATIVE_COLOR: Color = Color::Red;

/// Muted text color.
pub const MUTED_COLOR: Color = Color::DarkGray;

/// Live indicator color.
pub const LIVE_COLOR: Color = Color::Green;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Style for the table header row.
pub const TABLE_HEADER_STYLE: Style = Style::new()
    .fg(PRIMARY_COLOR)
    .add_modifier(Modifier::BOLD);

/// Style for ticker symbols in the token column.
pub const SYMBOL_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Tint applied to the row the scanline is currently crossing.
pub const SCANLINE_STYLE: Style = Style::new().bg(Color::Rgb(18, 48, 28));
