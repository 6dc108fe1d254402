//! HTTP response DTOs.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::ports::{PriceFeedError, Quote};
use crate::application::use_cases::PlanLadderError;
use crate::domain::ladder::LadderError;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message.
    pub error: String,
    /// Machine-readable code.
    pub code: String,
}

/// Latest price for a symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceResponse {
    /// Exchange symbol.
    pub symbol: String,
    /// Last price.
    pub price: Decimal,
    /// When the price was fetched.
    pub fetched_at: DateTime<Utc>,
}

impl From<Quote> for PriceResponse {
    fn from(quote: Quote) -> Self {
        Self {
            symbol: quote.symbol,
            price: quote.price,
            fetched_at: quote.fetched_at,
        }
    }
}

/// Nudged price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NudgeResponse {
    /// Perturbed price, 2 decimal places.
    pub price: Decimal,
}

/// Handler error converted into a status code and [`ErrorResponse`].
#[derive(Debug)]
pub struct ApiError(pub PlanLadderError);

impl From<PlanLadderError> for ApiError {
    fn from(err: PlanLadderError) -> Self {
        Self(err)
    }
}

impl From<LadderError> for ApiError {
    fn from(err: LadderError) -> Self {
        Self(err.into())
    }
}

impl From<PriceFeedError> for ApiError {
    fn from(err: PriceFeedError) -> Self {
        Self(err.into())
    }
}

impl ApiError {
    /// HTTP status for the error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match &self.0 {
            PlanLadderError::Ladder(_) | PlanLadderError::MissingAnchor => StatusCode::BAD_REQUEST,
            PlanLadderError::PriceFeed(PriceFeedError::SymbolNotFound { .. }) => {
                StatusCode::NOT_FOUND
            }
            PlanLadderError::PriceFeed(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        } else {
            tracing::debug!(error = %self.0, "Request rejected");
        }

        let body = ErrorResponse {
            error: self.0.to_string(),
            code: self.0.code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Reject a non-positive price before nudging it.
pub(super) fn require_positive_price(price: Decimal) -> Result<Decimal, ApiError> {
    if price > Decimal::ZERO {
        Ok(price)
    } else {
        Err(LadderError::invalid_input("price", "must be positive").into())
    }
}
