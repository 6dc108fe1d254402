//! Ladder summary and per-level annotation.

use rust_decimal::Decimal;

use crate::domain::ladder::LadderError;
use crate::domain::ladder::value_objects::{Ladder, LadderMode, LadderSummary};

/// Compute the volume-weighted average price and the slot where its marker
/// belongs.
///
/// Adjacent pairs are scanned from the anchor outward; the first pair whose
/// prices bracket the average (inclusive, in either direction) wins and the
/// marker goes before the pair's second level.
///
/// Each price is weighted by its share of the total size, so the average
/// never leaves the range of the ladder's prices and cannot overflow for a
/// generated ladder.
///
/// # Errors
///
/// Returns `LadderError::EmptyLadder` for a ladder without levels and
/// `LadderError::ZeroVolume` when sizes sum to zero. A hand-built ladder
/// whose sizes or weighted prices exceed `Decimal::MAX` is
/// `LadderError::InvalidScenario`.
pub fn summarize(ladder: &Ladder) -> Result<LadderSummary, LadderError> {
    if ladder.is_empty() {
        return Err(LadderError::EmptyLadder);
    }

    let total_size = ladder
        .iter()
        .try_fold(Decimal::ZERO, |acc, level| acc.checked_add(level.size))
        .ok_or_else(|| LadderError::invalid_scenario("ladder size overflows"))?;
    if total_size.is_zero() {
        return Err(LadderError::ZeroVolume);
    }

    let average = ladder
        .iter()
        .try_fold(Decimal::ZERO, |acc, level| {
            let weight = level.size.checked_div(total_size)?;
            acc.checked_add(level.price.checked_mul(weight)?)
        })
        .ok_or_else(|| LadderError::invalid_scenario("ladder average overflows"))?;

    let insertion_index = ladder
        .levels()
        .windows(2)
        .position(|pair| brackets(pair[0].price, pair[1].price, average))
        .map(|i| i + 1);

    if insertion_index.is_none() {
        tracing::warn!(%average, levels = ladder.len(), "Average price outside ladder range");
    }

    Ok(LadderSummary::new(average, insertion_index))
}

fn brackets(first: Decimal, second: Decimal, value: Decimal) -> bool {
    (first >= value && second <= value) || (first <= value && second >= value)
}

/// Percentage distance of `price` from `anchor`, in the mode's direction.
///
/// Pyramid levels report `(anchor - price) / anchor * 100` and reverse
/// pyramid levels `(price - anchor) / anchor * 100`, so both are
/// non-negative for a valid ladder; the sign is shown via
/// [`LadderMode::change_symbol`]. Returns `None` for a zero anchor or a
/// percentage too large to represent.
#[must_use]
pub fn percent_change(mode: LadderMode, anchor: Decimal, price: Decimal) -> Option<Decimal> {
    price
        .checked_sub(anchor)?
        .checked_mul(mode.step_sign())?
        .checked_div(anchor)?
        .checked_mul(Decimal::ONE_HUNDRED)
}
