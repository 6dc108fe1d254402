//! Application Ports (Driven)
//!
//! Ports define interfaces for the external systems the application uses.

mod price_feed_port;

pub use price_feed_port::{PriceFeedError, PriceFeedPort, Quote};
