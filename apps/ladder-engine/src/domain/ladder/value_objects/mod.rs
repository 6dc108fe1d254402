//! Order Ladder Value Objects

mod level;
mod mode;
mod multiplier;
mod order_count;
mod scenario;
mod summary;

pub use level::{Ladder, Level};
pub use mode::LadderMode;
pub use multiplier::Multiplier;
pub use order_count::{MAX_ORDER_COUNT, MIN_ORDER_COUNT, parse_order_count};
pub use scenario::Scenario;
pub use summary::LadderSummary;
