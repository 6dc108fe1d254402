//! Scenario value object: the inputs of one ladder calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::order_count::{MAX_ORDER_COUNT, MIN_ORDER_COUNT};
use super::{LadderMode, Multiplier};
use crate::domain::ladder::LadderError;

/// Inputs for one ladder calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Ladder direction.
    pub mode: LadderMode,
    /// Current market price; level 0 sits here.
    pub anchor_price: Decimal,
    /// Capital (pyramid) or quantity (reverse pyramid) to distribute.
    pub total_size: Decimal,
    /// Number of ladder levels.
    pub order_count: u32,
    /// Per-level weighting growth.
    #[serde(default)]
    pub multiplier: Multiplier,
    /// Farthest price from the anchor: a floor for pyramids, a ceiling for
    /// reverse pyramids.
    pub boundary_price: Decimal,
}

impl Scenario {
    /// Create a new scenario. Validation happens in [`Scenario::validate`].
    #[must_use]
    pub const fn new(
        mode: LadderMode,
        anchor_price: Decimal,
        total_size: Decimal,
        order_count: u32,
        multiplier: Multiplier,
        boundary_price: Decimal,
    ) -> Self {
        Self {
            mode,
            anchor_price,
            total_size,
            order_count,
            multiplier,
            boundary_price,
        }
    }

    /// Check that the scenario can produce a ladder.
    ///
    /// # Errors
    ///
    /// Returns `LadderError::InvalidScenario` describing the first problem found.
    pub fn validate(&self) -> Result<(), LadderError> {
        if self.order_count < MIN_ORDER_COUNT {
            return Err(LadderError::invalid_scenario(format!(
                "order count must be at least {MIN_ORDER_COUNT}, got {}",
                self.order_count
            )));
        }
        if self.order_count > MAX_ORDER_COUNT {
            return Err(LadderError::invalid_scenario(format!(
                "order count must be at most {MAX_ORDER_COUNT}, got {}",
                self.order_count
            )));
        }
        if self.anchor_price <= Decimal::ZERO {
            return Err(LadderError::invalid_scenario(format!(
                "anchor price must be positive, got {}",
                self.anchor_price
            )));
        }
        if self.total_size <= Decimal::ZERO {
            return Err(LadderError::invalid_scenario(format!(
                "{} must be positive, got {}",
                self.mode.size_label(),
                self.total_size
            )));
        }
        if self.boundary_price < Decimal::ZERO {
            return Err(LadderError::invalid_scenario(format!(
                "{} cannot be negative, got {}",
                self.mode.boundary_label(),
                self.boundary_price
            )));
        }
        if !self
            .mode
            .boundary_allowed(self.anchor_price, self.boundary_price)
        {
            let side = match self.mode {
                LadderMode::Pyramid => "above",
                LadderMode::ReversePyramid => "below",
            };
            return Err(LadderError::invalid_scenario(format!(
                "{} {} is {side} the anchor price {}",
                self.mode.boundary_label(),
                self.boundary_price,
                self.anchor_price
            )));
        }
        Ok(())
    }

    /// Distance between adjacent levels.
    ///
    /// Only meaningful for a validated scenario; returns zero when
    /// `order_count < 2`.
    #[must_use]
    pub fn price_step(&self) -> Decimal {
        if self.order_count < MIN_ORDER_COUNT {
            return Decimal::ZERO;
        }
        (self.boundary_price - self.anchor_price).abs() / Decimal::from(self.order_count - 1)
    }
}
