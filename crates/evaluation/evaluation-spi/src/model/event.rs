//! Detected anomaly events.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A merged, continuous span of anomalous behavior.
///
/// Derived by merging consecutive or near-consecutive anomalous samples.
/// Invariant: `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Start of the anomalous span.
    pub start: Timestamp,
    /// End of the anomalous span (timestamp of the last anomalous sample).
    pub end: Timestamp,
}

impl Event {
    /// Create a new event.
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Duration of the event in seconds.
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// An event annotated by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatedEvent {
    /// The underlying event span.
    pub event: Event,
    /// Whether the event overlaps a known label (within the early-warning
    /// tolerance).
    pub true_positive: bool,
}
