//! Unit lookup errors

use thiserror::Error;

use super::scale::UnitFamily;

/// Errors raised by unit lookups and option key parsing.
///
/// All of these are input validation failures; retrying with the same
/// input always fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("Invalid unit family: {0:?} (expected \"weight\" or \"volume\")")]
    InvalidFamily(String),

    #[error("Unknown scale {scale} for {family}")]
    UnknownScale { family: UnitFamily, scale: f64 },

    #[error("Invalid option key: {0:?}")]
    InvalidOptionKey(String),
}

/// Result type for unit operations
pub type UnitResult<T> = Result<T, UnitError>;
