//! Default form values per ladder mode.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::ladder::{LadderMode, Multiplier, Scenario};

/// Values a front end pre-fills before the user edits anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Anchor price.
    #[serde(default = "default_anchor_price")]
    pub anchor_price: Decimal,
    /// Total capital or quantity.
    #[serde(default = "default_total_size")]
    pub total_size: Decimal,
    /// Number of levels.
    #[serde(default = "default_order_count")]
    pub order_count: u32,
    /// Weighting multiplier.
    #[serde(default)]
    pub multiplier: Multiplier,
    /// Lowest buy price for pyramids.
    #[serde(default = "default_pyramid_boundary")]
    pub pyramid_boundary_price: Decimal,
    /// Highest sell price for reverse pyramids.
    #[serde(default = "default_reverse_pyramid_boundary")]
    pub reverse_pyramid_boundary_price: Decimal,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            anchor_price: default_anchor_price(),
            total_size: default_total_size(),
            order_count: default_order_count(),
            multiplier: Multiplier::default(),
            pyramid_boundary_price: default_pyramid_boundary(),
            reverse_pyramid_boundary_price: default_reverse_pyramid_boundary(),
        }
    }
}

impl DefaultsConfig {
    /// Default scenario for a mode.
    #[must_use]
    pub const fn scenario(&self, mode: LadderMode) -> Scenario {
        let boundary_price = match mode {
            LadderMode::Pyramid => self.pyramid_boundary_price,
            LadderMode::ReversePyramid => self.reverse_pyramid_boundary_price,
        };
        Scenario::new(
            mode,
            self.anchor_price,
            self.total_size,
            self.order_count,
            self.multiplier,
            boundary_price,
        )
    }
}

fn default_anchor_price() -> Decimal {
    Decimal::from(95_000)
}

const fn default_total_size() -> Decimal {
    Decimal::ONE
}

const fn default_order_count() -> u32 {
    5
}

fn default_pyramid_boundary() -> Decimal {
    Decimal::from(90_000)
}

fn default_reverse_pyramid_boundary() -> Decimal {
    Decimal::from(100_000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenarios_per_mode() {
        let defaults = DefaultsConfig::default();

        let pyramid = defaults.scenario(LadderMode::Pyramid);
        assert_eq!(pyramid.anchor_price, Decimal::from(95_000));
        assert_eq!(pyramid.boundary_price, Decimal::from(90_000));
        assert_eq!(pyramid.order_count, 5);
        assert!(pyramid.validate().is_ok());

        let reverse = defaults.scenario(LadderMode::ReversePyramid);
        assert_eq!(reverse.boundary_price, Decimal::from(100_000));
        assert!(reverse.validate().is_ok());
    }
}
