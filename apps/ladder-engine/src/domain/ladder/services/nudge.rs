//! Random price nudge.
//!
//! Shifts a price by a small random amount so a batch of ladders does not
//! stack every order on the same round number.

use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Maximum relative shift: 0.005% of the price in either direction.
pub const NUDGE_FRACTION: Decimal = Decimal::from_parts(5, 0, 0, false, 5); // 0.00005

/// Move `price` by a uniformly random amount within `±price * NUDGE_FRACTION`,
/// rounded to 2 decimal places. A shift that cannot be represented leaves
/// the price unmoved.
pub fn nudge_price<R: Rng>(price: Decimal, rng: &mut R) -> Decimal {
    let variation = price * NUDGE_FRACTION;
    let unit = Decimal::from_f64(rng.random_range(-1.0..=1.0)).unwrap_or(Decimal::ZERO);
    let nudged = variation
        .checked_mul(unit)
        .and_then(|shift| price.checked_add(shift))
        .unwrap_or(price)
        .round_dp(2);

    tracing::debug!(%price, %variation, %nudged, "Nudged price");
    nudged
}
