//! Order Ladder Errors

use thiserror::Error;

/// Errors that can occur while building or summarizing a ladder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LadderError {
    /// The scenario cannot produce a ladder.
    #[error("Invalid scenario: {reason}")]
    InvalidScenario {
        /// Why the scenario was rejected.
        reason: String,
    },

    /// A raw form field could not be interpreted.
    #[error("Invalid value for '{field}': {message}")]
    InvalidInput {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },

    /// The ladder has no levels.
    #[error("Ladder has no levels")]
    EmptyLadder,

    /// The ladder's sizes sum to zero, so no average exists.
    #[error("Ladder has zero total size")]
    ZeroVolume,
}

impl LadderError {
    /// Shorthand for [`LadderError::InvalidScenario`].
    pub fn invalid_scenario(reason: impl Into<String>) -> Self {
        Self::InvalidScenario {
            reason: reason.into(),
        }
    }

    /// Shorthand for [`LadderError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}
