// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Ladder Engine - Rust Core Library
//!
//! Plans staged limit-order ladders ("pyramids") for spot trading: evenly
//! spaced prices between the market price and a boundary, with sizes that
//! grow linearly and always add up to the requested total.
//!
//! # Architecture (Clean Architecture + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Pure ladder arithmetic
//!   - `ladder`: scenarios, generation, volume-weighted average, price nudge
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `PriceFeedPort`
//!   - `use_cases`: `PlanLadder`
//!   - `services`: display model and text table
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `http`: REST API
//!   - `price_feed`: public ticker adapter and in-memory mock
//!
//! # Example
//!
//! ```rust
//! use ladder_engine::{LadderMode, Multiplier, Scenario, generate, summarize};
//! use rust_decimal::Decimal;
//!
//! let scenario = Scenario::new(
//!     LadderMode::Pyramid,
//!     Decimal::from(95_000),
//!     Decimal::ONE,
//!     5,
//!     Multiplier::new(Decimal::new(5, 1)).unwrap(),
//!     Decimal::from(90_000),
//! );
//! let ladder = generate(&scenario).unwrap();
//! let summary = summarize(&ladder).unwrap();
//!
//! assert_eq!(ladder.total_size(), Decimal::ONE);
//! assert_eq!(summary.volume_weighted_average_price, Decimal::from(91_875));
//! assert_eq!(summary.insertion_index, Some(3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

/// Configuration loading and validation.
pub mod config;

// =============================================================================
// Re-exports
// =============================================================================

pub use domain::ladder::{
    Ladder, LadderError, LadderMode, LadderSummary, Level, Multiplier, Scenario, generate,
    summarize,
};

pub use application::use_cases::{PlanLadderError, PlanLadderUseCase};
