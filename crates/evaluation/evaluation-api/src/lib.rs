//! Anomaly Event Evaluation API
//!
//! Configuration types for the event merger and the classifier.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use evaluation_spi::{
    AnomalyPoint, EvaluatedEvent, EvaluatedLabel, EvaluationError, EvaluationStats, Event, Label,
    Result, Timestamp,
};

const SECONDS_PER_HOUR: f64 = 3600.0;

// ============================================================================
// Merger Configuration
// ============================================================================

/// Event merger configuration.
///
/// Two anomalous runs separated by a gap no larger than the merge-gap
/// threshold are combined into a single event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Merge-gap threshold in seconds.
    pub gap: i64,
    /// Whether a trailing run of anomalous points that never returns to
    /// normal before the input ends is emitted as a final event.
    pub flush_open_event: bool,
}

impl MergeConfig {
    /// Create a merge configuration from a threshold expressed in hours.
    ///
    /// The threshold must be finite and non-negative.
    pub fn new(gap_hours: f64) -> Result<Self> {
        if !gap_hours.is_finite() || gap_hours < 0.0 {
            return Err(EvaluationError::invalid_parameter(
                "gap_hours",
                "must be finite and >= 0",
            ));
        }
        Ok(Self {
            gap: (gap_hours * SECONDS_PER_HOUR) as i64,
            flush_open_event: true,
        })
    }

    /// Keep the reference behavior of dropping a trailing open run.
    pub fn without_flush(mut self) -> Self {
        self.flush_open_event = false;
        self
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            gap: 0,
            flush_open_event: true,
        }
    }
}

// ============================================================================
// Classifier Configuration
// ============================================================================

/// Classifier configuration.
///
/// The early-warning threshold is a tolerance window allowing an event
/// shortly before a label (or vice versa) to still count as a match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Early-warning tolerance in seconds.
    pub early_warning: i64,
}

impl ClassifierConfig {
    /// Create a classifier configuration from a threshold expressed in hours.
    ///
    /// The threshold must be finite and non-negative.
    pub fn new(early_warning_hours: f64) -> Result<Self> {
        if !early_warning_hours.is_finite() || early_warning_hours < 0.0 {
            return Err(EvaluationError::invalid_parameter(
                "early_warning_hours",
                "must be finite and >= 0",
            ));
        }
        Ok(Self {
            early_warning: (early_warning_hours * SECONDS_PER_HOUR) as i64,
        })
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self { early_warning: 0 }
    }
}
