//! Ladder summary value object.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregate statistics for a ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderSummary {
    /// Size-weighted mean of the level prices.
    pub volume_weighted_average_price: Decimal,
    /// Index (in generation order) before which the average-price marker
    /// belongs. `None` when no adjacent pair of levels brackets the average.
    pub insertion_index: Option<usize>,
}

impl LadderSummary {
    /// Create a new summary.
    #[must_use]
    pub const fn new(volume_weighted_average_price: Decimal, insertion_index: Option<usize>) -> Self {
        Self {
            volume_weighted_average_price,
            insertion_index,
        }
    }

    /// Insertion index with `-1` standing for "no marker".
    #[must_use]
    pub fn insertion_index_or_sentinel(&self) -> i64 {
        self.insertion_index
            .and_then(|index| i64::try_from(index).ok())
            .unwrap_or(-1)
    }
}
