//! Order Ladder Domain Services
//!
//! Stateless functions over ladder value objects.

mod generator;
mod nudge;
mod presenter;

pub use generator::generate;
pub use nudge::{NUDGE_FRACTION, nudge_price};
pub use presenter::{percent_change, summarize};
