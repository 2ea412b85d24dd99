//! Anomaly Event Evaluation Service Provider Interface
//!
//! Defines the data model and error types for event evaluation.

pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use error::{EvaluationError, Result};
pub use model::{
    AnomalyPoint, EvaluatedEvent, EvaluatedLabel, Evaluation, Event, EvaluationStats, Label,
    Timestamp,
};
