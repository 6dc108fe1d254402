//! Domain Layer
//!
//! Ladder construction and summary logic with zero infrastructure
//! dependencies.
//!
//! # Bounded Contexts
//!
//! - [`ladder`]: Pyramid / reverse-pyramid order ladders, their
//!   volume-weighted average and display annotations

pub mod ladder;
