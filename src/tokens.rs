//! The fixed token dataset rendered by the dashboard.

/// One immutable entry describing a token's display metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// Position in the list, 1-based and unique.
    pub rank: u8,
    /// Full token name.
    pub name: &'static str,
    /// Ticker symbol, unique across the list.
    pub symbol: &'static str,
    /// Price in USD.
    pub price: f64,
    /// 24-hour change as a signed percentage.
    pub change_24h: f64,
    /// Market capitalization in USD.
    pub market_cap: f64,
    /// 24-hour trading volume in USD.
    pub volume_24h: f64,
}

impl Token {
    const fn new(
        rank: u8,
        name: &'static str,
        symbol: &'static str,
        price: f64,
        change_24h: f64,
        market_cap: f64,
        volume_24h: f64,
    ) -> Self {
        Self {
            rank,
            name,
            symbol,
            price,
            change_24h,
            market_cap,
            volume_24h,
        }
    }
}

/// Top 10 Solana ecosystem tokens, ordered by rank ascending.
///
/// The list is fixed at compile time and never mutated.
pub const TOP_TOKENS: [Token; 10] = [
    Token::new(1, "Solana", "SOL", 178.42, 3.24, 82_500_000_000.0, 2_890_000_000.0),
    Token::new(2, "Jupiter", "JUP", 1.12, -1.87, 1_510_000_000.0, 198_000_000.0),
    Token::new(3, "Raydium", "RAY", 5.67, 5.42, 1_480_000_000.0, 156_000_000.0),
    Token::new(4, "Jito", "JTO", 3.89, 2.15, 1_120_000_000.0, 89_000_000.0),
    Token::new(5, "Pyth Network", "PYTH", 0.42, -0.34, 980_000_000.0, 67_000_000.0),
    Token::new(6, "Bonk", "BONK", 0.000028, 8.92, 890_000_000.0, 245_000_000.0),
    Token::new(7, "Marinade", "MNDE", 0.18, 1.23, 456_000_000.0, 34_000_000.0),
    Token::new(8, "Orca", "ORCA", 4.56, -2.45, 312_000_000.0, 28_000_000.0),
    Token::new(9, "Helium", "HNT", 8.34, 0.87, 298_000_000.0, 21_000_000.0),
    Token::new(10, "Render", "RNDR", 10.23, 4.12, 285_000_000.0, 156_000_000.0),
];
