//! Error types for anomaly event evaluation.
//!
//! This module contains error types and the Result alias.

mod evaluation_error;

pub use evaluation_error::{EvaluationError, Result};
