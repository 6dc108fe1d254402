//! Application Services
//!
//! Display-side services shared by the inbound adapters.

pub mod format;
mod ladder_view;

pub use ladder_view::{LadderView, ViewEntry, ViewRow, ViewSummary};
