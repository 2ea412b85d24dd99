//! Aggregate accuracy statistics.

use serde::{Deserialize, Serialize};

/// Aggregate accuracy statistics for one evaluation pass.
///
/// Raw counts only: recomputed on every call, never mutated incrementally.
/// Ratio helpers return `None` on a zero denominator so that "no data"
/// is distinguishable from a zero rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationStats {
    /// Events overlapping at least one label.
    pub true_positives: usize,
    /// Events overlapping no label.
    pub false_positives: usize,
    /// Labels covered by at least one event.
    pub detected: usize,
    /// Labels covered by no event.
    pub undetected: usize,
    /// Labels inside the evaluation period (denominator for detection rate).
    pub num_labels: usize,
}

impl EvaluationStats {
    /// Fraction of events that are true positives, `None` when no events
    /// were classified.
    pub fn precision(&self) -> Option<f64> {
        let total = self.true_positives + self.false_positives;
        if total == 0 {
            None
        } else {
            Some(self.true_positives as f64 / total as f64)
        }
    }

    /// Fraction of evaluation-period labels that were detected, `None`
    /// when no labels fall inside the evaluation period.
    pub fn detection_rate(&self) -> Option<f64> {
        if self.num_labels == 0 {
            None
        } else {
            Some(self.detected as f64 / self.num_labels as f64)
        }
    }
}
