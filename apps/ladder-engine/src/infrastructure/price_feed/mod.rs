//! Price Feed Adapters
//!
//! Implementations of `PriceFeedPort`.

pub mod http;
pub mod mock;

pub use http::HttpPriceFeed;
pub use mock::MockPriceFeed;
