//! Mock price feed for testing and offline use.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::application::ports::{PriceFeedError, PriceFeedPort, Quote};

/// In-memory price table.
///
/// Symbols without a price are reported as not found, so running with market
/// data disabled behaves like a feed that knows no symbols.
#[derive(Debug, Default)]
pub struct MockPriceFeed {
    prices: RwLock<HashMap<String, Decimal>>,
}

impl MockPriceFeed {
    /// Create an empty mock price feed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the price for a symbol.
    pub fn set_price(&self, symbol: &str, price: Decimal) {
        if let Ok(mut prices) = self.prices.write() {
            prices.insert(symbol.to_uppercase(), price);
        }
    }
}

#[async_trait]
impl PriceFeedPort for MockPriceFeed {
    async fn last_price(&self, symbol: &str) -> Result<Quote, PriceFeedError> {
        let symbol = symbol.trim().to_uppercase();
        let prices = self
            .prices
            .read()
            .map_err(|e| PriceFeedError::ConnectionError {
                message: e.to_string(),
            })?;

        prices
            .get(&symbol)
            .map(|&price| Quote::new(symbol.clone(), price))
            .ok_or(PriceFeedError::SymbolNotFound { symbol })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn last_price_known_symbol() {
        let feed = MockPriceFeed::new();
        feed.set_price("BTCUSDT", Decimal::new(95_000, 0));

        let quote = feed.last_price("btcusdt").await.unwrap();

        assert_eq!(quote.symbol, "BTCUSDT");
        assert_eq!(quote.price, Decimal::new(95_000, 0));
    }

    #[tokio::test]
    async fn last_price_not_found() {
        let feed = MockPriceFeed::new();

        let result = feed.last_price("UNKNOWN").await;
        assert_eq!(
            result,
            Err(PriceFeedError::SymbolNotFound {
                symbol: "UNKNOWN".to_string()
            })
        );
    }

    #[tokio::test]
    async fn set_price_overwrites() {
        let feed = MockPriceFeed::new();
        feed.set_price("ETHUSDT", Decimal::new(3_000, 0));
        feed.set_price("ETHUSDT", Decimal::new(3_100, 0));

        let quote = feed.last_price("ETHUSDT").await.unwrap();
        assert_eq!(quote.price, Decimal::new(3_100, 0));
    }
}
