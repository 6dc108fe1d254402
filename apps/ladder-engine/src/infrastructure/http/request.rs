//! HTTP request DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::ladder::LadderMode;

/// Query string for the defaults endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsQuery {
    /// Ladder mode, pyramid when absent.
    #[serde(default)]
    pub mode: Option<LadderMode>,
}

/// Request to nudge a price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NudgeRequest {
    /// Price to perturb.
    pub price: Decimal,
}
