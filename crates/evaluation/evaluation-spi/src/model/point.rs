//! Point-wise anomaly samples.

use serde::{Deserialize, Serialize};

/// Unix timestamp in seconds.
pub type Timestamp = i64;

/// A single point-wise anomaly sample.
///
/// Produced by the detection service as a dense, time-ordered sequence,
/// one point per sampling interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyPoint {
    /// Unix timestamp of the sample.
    pub timestamp: Timestamp,
    /// Whether the model flagged this sample as anomalous.
    pub is_anomalous: bool,
}

impl AnomalyPoint {
    /// Create a new anomaly point.
    pub fn new(timestamp: Timestamp, is_anomalous: bool) -> Self {
        Self {
            timestamp,
            is_anomalous,
        }
    }
}
