//! Public market data configuration.

use serde::{Deserialize, Serialize};

/// Market data lookup configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketDataConfig {
    /// Look up anchor prices over HTTP. When disabled, only explicit anchor
    /// prices are accepted.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Base URL of the public ticker REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Quote asset appended to bare coin symbols (`BTC` -> `BTCUSDT`).
    #[serde(default = "default_quote_asset")]
    pub quote_asset: String,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            quote_asset: default_quote_asset(),
        }
    }
}

pub(crate) const fn default_true() -> bool {
    true
}

fn default_base_url() -> String {
    "https://api.binance.com".to_string()
}

const fn default_timeout_ms() -> u64 {
    5_000
}

fn default_quote_asset() -> String {
    "USDT".to_string()
}
