//! Ground-truth incident labels.

use serde::{Deserialize, Serialize};

use super::Timestamp;

/// An externally supplied ground-truth time window marking a known
/// historical incident.
///
/// Invariant: `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    /// Start of the incident window.
    pub start: Timestamp,
    /// End of the incident window.
    pub end: Timestamp,
}

impl Label {
    /// Create a new label.
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }
}

/// A label annotated by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatedLabel {
    /// The underlying incident window.
    pub label: Label,
    /// Whether any event was detected during the label window (within the
    /// early-warning tolerance). `None` when the label ends before the
    /// evaluation period starts and is excluded from statistics.
    pub detected: Option<bool>,
}
