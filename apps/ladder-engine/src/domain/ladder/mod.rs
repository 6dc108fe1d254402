//! Order Ladder Bounded Context
//!
//! Staged limit-order ladders ("pyramid" buys below the market and
//! "reverse pyramid" sells above it). Generation and summarization are
//! pure functions of a [`Scenario`]; nothing here holds state between calls.

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::LadderError;
pub use services::{generate, nudge_price, percent_change, summarize};
pub use value_objects::{
    Ladder, LadderMode, LadderSummary, Level, MAX_ORDER_COUNT, MIN_ORDER_COUNT, Multiplier,
    Scenario, parse_order_count,
};
