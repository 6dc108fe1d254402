//! Ladder generation.
//!
//! Two passes: lay out evenly spaced prices with linearly growing raw
//! sizes, then rescale every size by one factor so the ladder sums to the
//! requested total whatever the multiplier.

use rust_decimal::Decimal;

use crate::domain::ladder::LadderError;
use crate::domain::ladder::value_objects::{Ladder, LadderMode, Level, Scenario};

/// Generate the ladder for a scenario.
///
/// Level 0 sits at the anchor price and the last level exactly at the
/// boundary.
/// Level `i` receives `(total / count) * (1 + multiplier * i)` before
/// rescaling.
///
/// # Errors
///
/// Returns `LadderError::InvalidScenario` if the scenario fails validation
/// or a price or size cannot be represented.
pub fn generate(scenario: &Scenario) -> Result<Ladder, LadderError> {
    scenario.validate()?;

    let count = Decimal::from(scenario.order_count);
    let price_step = scenario.price_step();
    let direction = scenario.mode.step_sign();
    let multiplier = scenario.multiplier.value();
    let base_size = scenario.total_size / count;

    let last = scenario.order_count - 1;

    let mut raw_levels = Vec::with_capacity(scenario.order_count as usize);
    let mut raw_total = Decimal::ZERO;
    for i in 0..scenario.order_count {
        let index = Decimal::from(i);
        let price = if i == last {
            scenario.boundary_price
        } else {
            level_price(scenario, direction, price_step, index).ok_or_else(|| overflow(i))?
        };
        let raw_size = (Decimal::ONE + multiplier * index)
            .checked_mul(base_size)
            .ok_or_else(|| overflow(i))?;
        raw_total = raw_total
            .checked_add(raw_size)
            .ok_or_else(|| overflow(i))?;
        raw_levels.push(Level::new(price, raw_size));
    }

    if raw_total <= Decimal::ZERO {
        return Err(LadderError::invalid_scenario(
            "raw level sizes sum to zero",
        ));
    }

    let scale = scenario.total_size / raw_total;
    let levels = raw_levels
        .into_iter()
        .zip(0..)
        .map(|(level, i)| {
            level
                .size
                .checked_mul(scale)
                .map(|size| Level::new(level.price, size))
                .ok_or_else(|| overflow(i))
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        mode = %scenario.mode,
        order_count = scenario.order_count,
        %price_step,
        %scale,
        "Generated ladder"
    );

    Ok(Ladder::new(levels))
}

/// `anchor ± step * index`, never past the boundary.
///
/// The step is rounded to 28 significant digits, so `step * index` can land
/// a hair beyond the boundary (or below zero for a zero floor).
fn level_price(
    scenario: &Scenario,
    direction: Decimal,
    price_step: Decimal,
    index: Decimal,
) -> Option<Decimal> {
    let offset = price_step.checked_mul(index)?.checked_mul(direction)?;
    let price = scenario.anchor_price.checked_add(offset)?;
    Some(match scenario.mode {
        LadderMode::Pyramid => price.max(scenario.boundary_price),
        LadderMode::ReversePyramid => price.min(scenario.boundary_price),
    })
}

fn overflow(level: u32) -> LadderError {
    LadderError::invalid_scenario(format!("size of level {level} overflows"))
}
