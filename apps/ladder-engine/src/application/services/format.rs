//! Formatting helpers for ladder display.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a decimal with exactly `places` digits after the point, rounding
/// half away from zero.
#[must_use]
pub fn format_fixed(value: Decimal, places: u32) -> String {
    let rounded = value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", places as usize, rounded)
}

/// Format a percentage magnitude with a leading sign symbol, e.g. `-5.26%`.
#[must_use]
pub fn format_change(symbol: char, percent: Decimal) -> String {
    format!("{symbol}{}%", format_fixed(percent.abs(), 2))
}
