//! Data models for anomaly event evaluation.
//!
//! This module contains data structures shared between the merger,
//! the classifier and their consumers.

mod evaluation;
mod event;
mod label;
mod point;
mod stats;

pub use evaluation::Evaluation;
pub use event::{EvaluatedEvent, Event};
pub use label::{EvaluatedLabel, Label};
pub use point::{AnomalyPoint, Timestamp};
pub use stats::EvaluationStats;
