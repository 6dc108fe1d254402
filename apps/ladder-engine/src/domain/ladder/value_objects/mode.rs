//! Ladder mode value object.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::ladder::LadderError;

/// Direction of a ladder relative to the anchor price.
///
/// Every mode-dependent difference (price direction, display sign, size
/// precision, display order) is a property of this enum rather than a
/// separate code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LadderMode {
    /// Capital-weighted buy ladder descending from the anchor to a minimum price.
    Pyramid,
    /// Quantity-weighted sell ladder ascending from the anchor to a maximum price.
    ReversePyramid,
}

impl LadderMode {
    /// Sign applied to the price step: prices fall for `Pyramid`, rise for `ReversePyramid`.
    #[must_use]
    pub const fn step_sign(self) -> Decimal {
        match self {
            Self::Pyramid => Decimal::NEGATIVE_ONE,
            Self::ReversePyramid => Decimal::ONE,
        }
    }

    /// Sign shown in front of a level's percentage change.
    #[must_use]
    pub const fn change_symbol(self) -> char {
        match self {
            Self::Pyramid => '-',
            Self::ReversePyramid => '+',
        }
    }

    /// Decimal places for sizes: money for `Pyramid`, coin quantity for `ReversePyramid`.
    #[must_use]
    pub const fn size_precision(self) -> u32 {
        match self {
            Self::Pyramid => 2,
            Self::ReversePyramid => 8,
        }
    }

    /// Whether display order is the reverse of generation order.
    ///
    /// Reverse pyramids are shown highest price first, so the list reads
    /// top-down like an order book in both modes.
    #[must_use]
    pub const fn reversed_for_display(self) -> bool {
        matches!(self, Self::ReversePyramid)
    }

    /// Whether `boundary` lies on the allowed side of `anchor`.
    #[must_use]
    pub fn boundary_allowed(self, anchor: Decimal, boundary: Decimal) -> bool {
        match self {
            Self::Pyramid => boundary <= anchor,
            Self::ReversePyramid => boundary >= anchor,
        }
    }

    /// Label for the total size field.
    #[must_use]
    pub const fn size_label(self) -> &'static str {
        match self {
            Self::Pyramid => "total capital",
            Self::ReversePyramid => "total quantity",
        }
    }

    /// Label for the boundary price field.
    #[must_use]
    pub const fn boundary_label(self) -> &'static str {
        match self {
            Self::Pyramid => "lowest buy price",
            Self::ReversePyramid => "highest sell price",
        }
    }

    /// Label for the volume-weighted average price.
    #[must_use]
    pub const fn average_label(self) -> &'static str {
        match self {
            Self::Pyramid => "average entry price",
            Self::ReversePyramid => "average exit price",
        }
    }

    /// Stable identifier used in URLs and config keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pyramid => "pyramid",
            Self::ReversePyramid => "reverse_pyramid",
        }
    }
}

impl fmt::Display for LadderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LadderMode {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "pyramid" => Ok(Self::Pyramid),
            "reverse_pyramid" => Ok(Self::ReversePyramid),
            other => Err(LadderError::invalid_input(
                "mode",
                format!("unknown ladder mode '{other}'"),
            )),
        }
    }
}
