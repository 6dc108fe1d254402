//! Ladder level and ladder value objects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One limit order in a ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Limit price.
    pub price: Decimal,
    /// Capital or quantity at this price.
    pub size: Decimal,
}

impl Level {
    /// Create a new level.
    #[must_use]
    pub const fn new(price: Decimal, size: Decimal) -> Self {
        Self { price, size }
    }

    /// Price times size.
    #[must_use]
    pub fn notional(&self) -> Option<Decimal> {
        self.price.checked_mul(self.size)
    }
}

/// Ordered ladder levels; index 0 is nearest the anchor price.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ladder(Vec<Level>);

impl Ladder {
    /// Wrap levels that are already in generation order.
    #[must_use]
    pub const fn new(levels: Vec<Level>) -> Self {
        Self(levels)
    }

    /// Levels in generation order.
    #[must_use]
    pub fn levels(&self) -> &[Level] {
        &self.0
    }

    /// Number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the ladder has no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over levels in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Level> {
        self.0.iter()
    }

    /// Sum of all level sizes.
    #[must_use]
    pub fn total_size(&self) -> Decimal {
        self.0.iter().map(|level| level.size).sum()
    }

    /// Largest level size, or zero for an empty ladder.
    #[must_use]
    pub fn max_size(&self) -> Decimal {
        self.0
            .iter()
            .map(|level| level.size)
            .max()
            .unwrap_or(Decimal::ZERO)
    }

    /// Prices in generation order.
    #[must_use]
    pub fn prices(&self) -> Vec<Decimal> {
        self.0.iter().map(|level| level.price).collect()
    }

    /// Sizes in generation order.
    #[must_use]
    pub fn sizes(&self) -> Vec<Decimal> {
        self.0.iter().map(|level| level.size).collect()
    }

    /// Consume the ladder, returning its levels.
    #[must_use]
    pub fn into_levels(self) -> Vec<Level> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Ladder {
    type Item = &'a Level;
    type IntoIter = std::slice::Iter<'a, Level>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
