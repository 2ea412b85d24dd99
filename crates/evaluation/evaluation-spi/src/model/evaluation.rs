//! Composite evaluation result.

use serde::{Deserialize, Serialize};

use super::{EvaluatedEvent, EvaluatedLabel, EvaluationStats};

/// Full result of one classification pass.
///
/// Holds newly annotated copies of the events and labels; the caller's
/// inputs are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Events annotated as true or false positives.
    pub events: Vec<EvaluatedEvent>,
    /// Labels annotated as detected, undetected or excluded.
    pub labels: Vec<EvaluatedLabel>,
    /// Aggregate counts over the annotated events and labels.
    pub stats: EvaluationStats,
}
