/// Events emitted by the background effect timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectEvent {
    /// The wall-clock ticker fired.
    ClockTick,
    /// The scanline ticker fired.
    ScanTick,
    /// The one-shot reveal timer for the row at this index fired.
    RowRevealed(usize),
}

/// Application actions triggered by user input or effect events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    UpdateClock,
    AdvanceScanline,
    RevealRow(usize),
}
