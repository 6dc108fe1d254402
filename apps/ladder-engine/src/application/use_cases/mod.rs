//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod plan_ladder;

pub use plan_ladder::{PlanLadderError, PlanLadderUseCase, plan};
