//! Public REST ticker price feed adapter.
//!
//! Reads `GET {base_url}/api/v3/ticker/price?symbol=...`, which answers with
//! `{"symbol": "BTCUSDT", "price": "95000.12000000"}` and needs no API key.

use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::ports::{PriceFeedError, PriceFeedPort, Quote};
use crate::config::MarketDataConfig;

/// Exchange error code for an unknown symbol.
const INVALID_SYMBOL_CODE: i64 = -1121;

/// Ticker price response.
#[derive(Debug, Deserialize)]
struct TickerPriceResponse {
    symbol: String,
    price: Decimal,
}

/// Exchange error body.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    code: i64,
    msg: String,
}

/// HTTP price feed adapter.
#[derive(Debug, Clone)]
pub struct HttpPriceFeed {
    client: reqwest::Client,
    base_url: String,
    quote_asset: String,
}

impl HttpPriceFeed {
    /// Create a new adapter from configuration.
    pub fn new(config: &MarketDataConfig) -> Result<Self, PriceFeedError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| PriceFeedError::ConnectionError {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            quote_asset: config.quote_asset.trim().to_uppercase(),
        })
    }

    /// Normalize user input into an exchange symbol: `btc` -> `BTCUSDT`.
    pub fn normalize_symbol(&self, raw: &str) -> Result<String, PriceFeedError> {
        let symbol = raw.trim().to_uppercase();
        if symbol.is_empty()
            || symbol == self.quote_asset
            || !symbol.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(PriceFeedError::SymbolNotFound {
                symbol: raw.to_string(),
            });
        }
        if symbol.ends_with(&self.quote_asset) {
            Ok(symbol)
        } else {
            Ok(format!("{symbol}{}", self.quote_asset))
        }
    }

    async fn fetch_ticker(&self, symbol: &str) -> Result<TickerPriceResponse, PriceFeedError> {
        let url = format!("{}/api/v3/ticker/price", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("symbol", symbol)])
            .send()
            .await
            .map_err(|e| PriceFeedError::ConnectionError {
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(err) if err.code == INVALID_SYMBOL_CODE => PriceFeedError::SymbolNotFound {
                    symbol: symbol.to_string(),
                },
                Ok(err) => PriceFeedError::InvalidResponse {
                    message: format!("{status}: {} ({})", err.msg, err.code),
                },
                Err(_) => PriceFeedError::InvalidResponse {
                    message: format!("{status}: {body}"),
                },
            });
        }

        response
            .json()
            .await
            .map_err(|e| PriceFeedError::InvalidResponse {
                message: e.to_string(),
            })
    }
}

#[async_trait]
impl PriceFeedPort for HttpPriceFeed {
    async fn last_price(&self, symbol: &str) -> Result<Quote, PriceFeedError> {
        let symbol = self.normalize_symbol(symbol)?;
        let ticker = self.fetch_ticker(&symbol).await?;

        if ticker.price <= Decimal::ZERO {
            return Err(PriceFeedError::InvalidResponse {
                message: format!("non-positive price {} for {}", ticker.price, ticker.symbol),
            });
        }

        tracing::debug!(symbol = %ticker.symbol, price = %ticker.price, "Fetched ticker price");
        Ok(Quote::new(ticker.symbol, ticker.price.normalize()))
    }
}
