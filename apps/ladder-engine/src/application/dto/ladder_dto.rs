//! Ladder DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::ports::Quote;
use crate::application::services::LadderView;
use crate::domain::ladder::{
    Ladder, LadderError, LadderMode, LadderSummary, Multiplier, Scenario, parse_order_count,
    percent_change,
};

/// Order count as sent by a form: either a JSON number or the raw text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderCountInput {
    /// Already numeric.
    Number(u32),
    /// Raw text from an input field.
    Text(String),
}

impl OrderCountInput {
    /// Resolve to a count.
    pub fn resolve(&self) -> Result<u32, LadderError> {
        match self {
            Self::Number(count) => Ok(*count),
            Self::Text(raw) => parse_order_count(raw),
        }
    }
}

impl From<u32> for OrderCountInput {
    fn from(count: u32) -> Self {
        Self::Number(count)
    }
}

/// Request to plan a ladder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanLadderRequestDto {
    /// Ladder mode.
    pub mode: LadderMode,
    /// Anchor price. Looked up from `symbol` when absent.
    #[serde(default)]
    pub anchor_price: Option<Decimal>,
    /// Trading pair for the anchor price lookup.
    #[serde(default)]
    pub symbol: Option<String>,
    /// Capital or quantity to distribute.
    pub total_size: Decimal,
    /// Number of levels.
    pub order_count: OrderCountInput,
    /// Weighting multiplier.
    #[serde(default)]
    pub multiplier: Decimal,
    /// Treat `multiplier` as a raw slider position (clamp and snap) instead
    /// of rejecting out-of-range values.
    #[serde(default)]
    pub snap_multiplier: bool,
    /// Boundary price.
    pub boundary_price: Decimal,
}

impl PlanLadderRequestDto {
    /// Build the domain scenario once the anchor price is known.
    pub fn to_scenario(&self, anchor_price: Decimal) -> Result<Scenario, LadderError> {
        let multiplier = if self.snap_multiplier {
            Multiplier::from_slider(self.multiplier)
        } else {
            Multiplier::new(self.multiplier)?
        };

        Ok(Scenario::new(
            self.mode,
            anchor_price,
            self.total_size,
            self.order_count.resolve()?,
            multiplier,
            self.boundary_price,
        ))
    }
}

/// A ladder level with its annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelDto {
    /// Index in generation order (0 = nearest the anchor).
    pub index: usize,
    /// Limit price.
    pub price: Decimal,
    /// Capital or quantity.
    pub size: Decimal,
    /// Percentage distance from the anchor, see [`percent_change`].
    pub percent_change: Decimal,
}

/// Ladder summary with the `-1` convention for "no marker".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderSummaryDto {
    /// Volume-weighted average price.
    pub volume_weighted_average_price: Decimal,
    /// Marker slot in generation order, or `-1`.
    pub insertion_index: i64,
}

impl From<&LadderSummary> for LadderSummaryDto {
    fn from(summary: &LadderSummary) -> Self {
        Self {
            volume_weighted_average_price: summary.volume_weighted_average_price,
            insertion_index: summary.insertion_index_or_sentinel(),
        }
    }
}

/// Response for a planned ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLadderResponseDto {
    /// Scenario the ladder was generated from.
    pub scenario: Scenario,
    /// Quote used as the anchor, when one was looked up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<Quote>,
    /// Levels in generation order.
    pub levels: Vec<LevelDto>,
    /// Summary statistics.
    pub summary: LadderSummaryDto,
    /// Display model.
    pub view: LadderView,
}

impl PlanLadderResponseDto {
    /// Assemble the response from domain results.
    #[must_use]
    pub fn new(
        scenario: Scenario,
        quote: Option<Quote>,
        ladder: &Ladder,
        summary: &LadderSummary,
    ) -> Self {
        let levels = ladder
            .iter()
            .enumerate()
            .map(|(index, level)| LevelDto {
                index,
                price: level.price,
                size: level.size,
                percent_change: percent_change(scenario.mode, scenario.anchor_price, level.price)
                    .unwrap_or(Decimal::ZERO),
            })
            .collect();
        let view = LadderView::build(&scenario, ladder, summary);

        Self {
            scenario,
            quote,
            levels,
            summary: LadderSummaryDto::from(summary),
            view,
        }
    }
}

/// Default form values for a mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderDefaultsDto {
    /// Ladder mode.
    pub mode: LadderMode,
    /// Default anchor price.
    pub anchor_price: Decimal,
    /// Default total size.
    pub total_size: Decimal,
    /// Default order count.
    pub order_count: u32,
    /// Default multiplier.
    pub multiplier: Multiplier,
    /// Default boundary price.
    pub boundary_price: Decimal,
    /// Label for the total size field.
    pub total_label: String,
    /// Label for the boundary price field.
    pub boundary_label: String,
}

impl From<Scenario> for LadderDefaultsDto {
    fn from(scenario: Scenario) -> Self {
        Self {
            mode: scenario.mode,
            anchor_price: scenario.anchor_price,
            total_size: scenario.total_size,
            order_count: scenario.order_count,
            multiplier: scenario.multiplier,
            boundary_price: scenario.boundary_price,
            total_label: scenario.mode.size_label().to_string(),
            boundary_label: scenario.mode.boundary_label().to_string(),
        }
    }
}
