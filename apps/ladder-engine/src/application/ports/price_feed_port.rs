//! Price Feed Port (Driven Port)
//!
//! Interface for looking up the current public price of a trading pair.
//! Only market data is read; nothing is ever sent to an exchange.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Latest traded price for a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Exchange symbol, e.g. `BTCUSDT`.
    pub symbol: String,
    /// Last price.
    pub price: Decimal,
    /// When the price was fetched.
    pub fetched_at: DateTime<Utc>,
}

impl Quote {
    /// Create a new quote stamped with the current time.
    #[must_use]
    pub fn new(symbol: impl Into<String>, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            fetched_at: Utc::now(),
        }
    }
}

/// Price feed error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceFeedError {
    /// Connection error.
    #[error("Price feed connection error: {message}")]
    ConnectionError {
        /// Error details.
        message: String,
    },

    /// Symbol not found.
    #[error("Symbol not found: {symbol}")]
    SymbolNotFound {
        /// The unknown symbol.
        symbol: String,
    },

    /// The feed answered with something unusable.
    #[error("Invalid price feed response: {message}")]
    InvalidResponse {
        /// Error details.
        message: String,
    },
}

/// Port for looking up market prices.
#[async_trait]
pub trait PriceFeedPort: Send + Sync {
    /// Get the latest price for a symbol.
    async fn last_price(&self, symbol: &str) -> Result<Quote, PriceFeedError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_new() {
        let quote = Quote::new("BTCUSDT", Decimal::new(95_000, 0));

        assert_eq!(quote.symbol, "BTCUSDT");
        assert_eq!(quote.price, Decimal::new(95_000, 0));
        assert!(quote.fetched_at <= Utc::now());
    }

    #[test]
    fn quote_serde() {
        let quote = Quote::new("ETHUSDT", Decimal::new(345_012, 2));
        let json = serde_json::to_string(&quote).unwrap();
        let parsed: Quote = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, quote);
    }

    #[test]
    fn error_display() {
        let err = PriceFeedError::SymbolNotFound {
            symbol: "NOPEUSDT".to_string(),
        };
        assert_eq!(err.to_string(), "Symbol not found: NOPEUSDT");
    }
}
