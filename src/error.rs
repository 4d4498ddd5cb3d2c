//! Error types for the 8-queens GA.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, GaError>;

/// Errors surfaced by the GA.
///
/// None of these are recovered internally: a run either starts with a
/// valid configuration and valid boards, or fails before doing any work.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaError {
    /// A run parameter is out of range.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// A board did not hold exactly one gene per column.
    #[error("Invalid individual: expected {expected} genes, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// A gene was outside the valid row range.
    #[error("Invalid individual: gene {value} at position {position} is outside [1, 8]")]
    GeneOutOfRange { position: usize, value: u8 },

    /// Crossover cut point past the end of the board.
    #[error("Invalid cut point {index}: must be within [0, 8]")]
    InvalidCutPoint { index: usize },
}

impl GaError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        GaError::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Returns `true` if the error came from a malformed board.
    pub fn is_invalid_individual(&self) -> bool {
        matches!(
            self,
            GaError::WrongLength { .. } | GaError::GeneOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GaError::config("tournament_size must be at least 2");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: tournament_size must be at least 2"
        );

        let err = GaError::WrongLength {
            expected: 8,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid individual: expected 8 genes, got 3"
        );

        let err = GaError::InvalidCutPoint { index: 9 };
        assert_eq!(err.to_string(), "Invalid cut point 9: must be within [0, 8]");
    }

    #[test]
    fn test_is_invalid_individual() {
        assert!(GaError::GeneOutOfRange {
            position: 0,
            value: 9
        }
        .is_invalid_individual());
        assert!(!GaError::config("x").is_invalid_individual());
        assert!(!GaError::InvalidCutPoint { index: 9 }.is_invalid_individual());
    }
}
