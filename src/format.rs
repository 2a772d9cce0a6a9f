//! Display formatting for prices, magnitudes and the system clock.
//!
//! All functions here are total over the value ranges the dashboard
//! renders; there are no failure paths.

use chrono::{DateTime, Local};

/// Formats a USD price with precision scaled to its magnitude.
///
/// Sub-millidollar prices get 6 decimals, sub-dollar prices 4, and
/// everything else 2.
///
/// # Example
///
/// ```rust
/// assert_eq!(format_price(178.42), "$178.42");
/// assert_eq!(format_price(0.000028), "$0.000028");
/// ```
#[must_use]
pub fn format_price(price: f64) -> String {
    if price < 0.001 {
        format!("${price:.6}")
    } else if price < 1.0 {
        format!("${price:.4}")
    } else {
        format!("${price:.2}")
    }
}

/// Formats a large USD magnitude (market cap or volume) with a B/M suffix.
///
/// # Example
///
/// ```rust
/// assert_eq!(format_magnitude(82_500_000_000.0), "$82.50B");
/// assert_eq!(format_magnitude(456_000_000.0), "$456M");
/// ```
#[must_use]
pub fn format_magnitude(value: f64) -> String {
    if value >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.0}M", value / 1e6)
    } else {
        format!("${value:.0}")
    }
}

/// Formats a 24-hour change percentage with an explicit sign.
#[must_use]
pub fn format_change(change: f64) -> String {
    format!("{change:+.2}%")
}

/// Formats a rank zero-padded to two digits.
#[must_use]
pub fn format_rank(rank: u8) -> String {
    format!("{rank:02}")
}

/// Formats a timestamp as 24-hour `HH:MM:SS`, locale-independent.
#[must_use]
pub fn format_clock(time: &DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case(0.000028, "$0.000028")]
    #[case(0.0009, "$0.000900")]
    #[case(0.001, "$0.0010")]
    #[case(0.18, "$0.1800")]
    #[case(0.42, "$0.4200")]
    #[case(1.0, "$1.00")]
    #[case(5.67, "$5.67")]
    #[case(178.42, "$178.42")]
    fn test_price_precision_tiers(#[case] price: f64, #[case] expected: &str) {
        assert_eq!(format_price(price), expected);
    }

    #[rstest]
    #[case(82_500_000_000.0, "$82.50B")]
    #[case(1_000_000_000.0, "$1.00B")]
    #[case(999_000_000.0, "$999M")]
    #[case(456_000_000.0, "$456M")]
    #[case(1_000_000.0, "$1M")]
    #[case(999_999.0, "$999999")]
    #[case(500.0, "$500")]
    fn test_magnitude_suffixes(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_magnitude(value), expected);
    }

    #[rstest]
    #[case(3.24, "+3.24%")]
    #[case(-1.87, "-1.87%")]
    #[case(0.0, "+0.00%")]
    fn test_change_sign_is_explicit(#[case] change: f64, #[case] expected: &str) {
        assert_eq!(format_change(change), expected);
    }

    #[test]
    fn test_rank_zero_padding() {
        assert_eq!(format_rank(1), "01");
        assert_eq!(format_rank(10), "10");
    }

    #[test]
    fn test_clock_is_24_hour() {
        let evening = Local.with_ymd_and_hms(2026, 1, 5, 21, 7, 3).unwrap();
        assert_eq!(format_clock(&evening), "21:07:03");

        let morning = Local.with_ymd_and_hms(2026, 1, 5, 9, 5, 0).unwrap();
        assert_eq!(format_clock(&morning), "09:05:00");
    }
}
