//! Error taxonomy for the analysis engine.
//!
//! Every failure is a local validation error detected at the entry of an
//! operation. Nothing is retried: all computations are deterministic.

use thiserror::Error;

/// Errors returned by freak analysis operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Statistics or entropy requested on a zero-length sequence.
    #[error("{operation} requires at least one byte of input")]
    EmptyInput { operation: &'static str },

    /// Invalid scalar parameter (column count or shift cap of zero).
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Encoded input could not be decoded. Raised by input loaders, never by
    /// the statistics engine itself.
    #[error("input decode failed: {0}")]
    InputDecode(String),
}

impl AnalysisError {
    pub(crate) fn empty(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }
}

/// Result alias used across freak-core.
pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_message_names_operation() {
        let err = AnalysisError::empty("statistics");
        assert_eq!(
            err.to_string(),
            "statistics requires at least one byte of input"
        );
    }

    #[test]
    fn test_configuration_message() {
        let err = AnalysisError::Configuration("column count must be at least 1".into());
        assert!(err.to_string().starts_with("invalid configuration:"));
    }
}
