//! Multiplier value object for per-level size growth.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::ladder::LadderError;

/// Per-level weighting growth factor, always within `[MIN, MAX]`.
///
/// Level `i` receives `1 + multiplier * i` base shares before the ladder is
/// rescaled, so `0` produces a uniform ladder and `2` makes the fifth level
/// nine times the size of the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Multiplier(Decimal);

impl Multiplier {
    /// Smallest allowed multiplier (uniform ladder).
    pub const MIN: Decimal = Decimal::ZERO;
    /// Largest allowed multiplier.
    pub const MAX: Decimal = Decimal::TWO;
    /// Slider granularity.
    pub const STEP: Decimal = Decimal::from_parts(5, 0, 0, false, 2); // 0.05

    /// Uniform ladder.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a multiplier, rejecting values outside `[MIN, MAX]`.
    ///
    /// # Errors
    ///
    /// Returns `LadderError::InvalidInput` if the value is out of range.
    pub fn new(value: Decimal) -> Result<Self, LadderError> {
        if value < Self::MIN || value > Self::MAX {
            return Err(LadderError::invalid_input(
                "multiplier",
                format!("must be between {} and {}, got {value}", Self::MIN, Self::MAX),
            ));
        }
        Ok(Self(value))
    }

    /// Interpret a raw slider position: clamp into range and snap to the
    /// nearest `STEP`.
    #[must_use]
    pub fn from_slider(value: Decimal) -> Self {
        let clamped = value.clamp(Self::MIN, Self::MAX);
        let steps = (clamped / Self::STEP)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        Self((steps * Self::STEP).normalize())
    }

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true for a uniform ladder.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<Decimal> for Multiplier {
    type Error = LadderError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Multiplier> for Decimal {
    fn from(multiplier: Multiplier) -> Self {
        multiplier.0
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
