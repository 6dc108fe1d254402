//! Order count parsing and bounds.

use crate::domain::ladder::LadderError;

/// Smallest order count that yields a ladder (the price step divides by `count - 1`).
pub const MIN_ORDER_COUNT: u32 = 2;

/// Largest order count accepted in one ladder.
pub const MAX_ORDER_COUNT: u32 = 1_000;

/// Parse the raw order-count form field.
///
/// Only plain ASCII digits are accepted. A blank field falls back to `1`,
/// which is then rejected by ladder generation rather than here, so the
/// caller sees the same error as any other degenerate count.
///
/// # Errors
///
/// Returns `LadderError::InvalidInput` for anything that is not a whole
/// non-negative number.
pub fn parse_order_count(raw: &str) -> Result<u32, LadderError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(1);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LadderError::invalid_input(
            "order_count",
            "please enter a whole number",
        ));
    }
    raw.parse::<u32>()
        .map_err(|e| LadderError::invalid_input("order_count", e.to_string()))
}
