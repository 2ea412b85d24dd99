//! Evaluation error types.

use thiserror::Error;

/// Anomaly event evaluation errors.
#[derive(Debug, Clone, Error)]
pub enum EvaluationError {
    /// A configuration parameter is out of range.
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The input sample sequence is not time-ordered.
    #[error("Unordered input: timestamp {current} follows {previous}")]
    UnorderedInput { previous: i64, current: i64 },
}

impl EvaluationError {
    /// Convenience constructor for invalid parameters.
    pub fn invalid_parameter(name: &str, reason: &str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for evaluation operations.
pub type Result<T> = std::result::Result<T, EvaluationError>;
