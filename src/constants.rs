//! Timing and layout constants for the soltrack TUI.
//!
//! Grouping these constants keeps the timer cadences, layout dimensions
//! and decorative footer figures consistent across the codebase.

use std::time::Duration;

// ============================================================================
// Timer Cadences
// ============================================================================

/// Cadence of the main draw loop.
pub const TICK_RATE: Duration = Duration::from_millis(50);

/// Interval between wall-clock refreshes in the header.
pub const CLOCK_INTERVAL: Duration = Duration::from_millis(1000);

/// Interval between scanline advances.
pub const SCAN_INTERVAL: Duration = Duration::from_millis(50);

/// Delay step between consecutive row reveals.
///
/// The row at index `i` becomes visible `i * REVEAL_STEP` after mount,
/// so rows cascade in top to bottom.
pub const REVEAL_STEP: Duration = Duration::from_millis(80);

/// The scanline position wraps back to zero at this value. Positions are
/// interpreted as a percentage of the frame height.
pub const SCANLINE_WRAP: u16 = 100;

/// Capacity of the effect event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 100;

// ============================================================================
// UI Dimension Constants
// ============================================================================

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the title block above the table (in rows).
pub const TITLE_HEIGHT: u16 = 3;

/// Height of the footer area (in rows).
pub const FOOTER_HEIGHT: u16 = 2;

// ============================================================================
// Display Text
// ============================================================================

/// Tagline shown next to the logo in the header.
pub const TAGLINE: &str = "NETWORK_TRACKER_v2.4";

/// Subtitle under the main heading.
pub const SUBTITLE: &str = "// MARKET_DATA_STREAM :: REALTIME_FEED";

/// Network name shown in the footer. Display-only.
pub const NETWORK_NAME: &str = "SOLANA_MAINNET";

/// Network TPS figure shown in the footer. Display-only.
pub const NETWORK_TPS: &str = "4,521";

/// Network slot figure shown in the footer. Display-only.
pub const NETWORK_SLOT: &str = "267,841,923";

// ============================================================================
// Tests
// ============================================================================
