//! Application render state and action dispatch.

use chrono::{DateTime, Local};

use crate::constants::SCANLINE_WRAP;
use crate::event::Action;
use crate::tokens::{TOP_TOKENS, Token};

/// Render state for the dashboard, owned by the main loop for the
/// lifetime of the TUI session.
pub struct App {
    /// The fixed token list shown in the table.
    pub tokens: &'static [Token],
    /// Wall-clock time shown in the header, refreshed by the clock ticker.
    pub current_time: DateTime<Local>,
    /// Vertical scanline position in `0..SCANLINE_WRAP`. Also drives the
    /// glitch shimmer phase.
    pub scanline_pos: u16,
    /// Whether the cosmetic timers are running.
    pub effects_enabled: bool,
    /// Main loop termination flag.
    pub exit: bool,
    /// Per-row visibility flags. Each flips false -> true once and stays set.
    revealed: Vec<bool>,
}

impl App {
    /// Creates the initial render state.
    ///
    /// With effects disabled every row starts revealed, since no reveal
    /// timers will fire.
    pub fn new(effects_enabled: bool) -> Self {
        Self {
            tokens: &TOP_TOKENS,
            current_time: Local::now(),
            scanline_pos: 0,
            effects_enabled,
            exit: false,
            revealed: vec![!effects_enabled; TOP_TOKENS.len()],
        }
    }

    /// Applies a single action to the state.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => self.exit = true,
            Action::UpdateClock => self.current_time = Local::now(),
            Action::AdvanceScanline => {
                self.scanline_pos = (self.scanline_pos + 1) % SCANLINE_WRAP;
            }
            Action::RevealRow(index) => {
                // Out-of-range indices are ignored.
                if let Some(flag) = self.revealed.get_mut(index) {
                    *flag = true;
                }
            }
        }
    }

    /// Whether the row at `index` has been revealed yet.
    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }
}
