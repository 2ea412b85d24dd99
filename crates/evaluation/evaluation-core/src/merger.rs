//! Event merger.
//!
//! Folds the dense point-wise anomaly mask produced by the detection
//! service into discrete events, combining anomalous runs separated by
//! gaps smaller than the merge-gap threshold.

use evaluation_api::MergeConfig;
use evaluation_spi::{AnomalyPoint, EvaluationError, Event, Result, Timestamp};

/// Merge point-wise anomaly samples into events.
///
/// Scans the sequence once: an event opens on the first anomalous sample
/// of a run and closes on the last anomalous sample seen before a normal
/// gap wider than `config.gap`. A trailing run that never returns to
/// normal is emitted only when `config.flush_open_event` is set.
///
/// Output events are non-overlapping and ordered by start time. The input
/// is expected to be time-ordered; see [`ensure_time_ordered`].
pub fn merge_anomaly_points(points: &[AnomalyPoint], config: &MergeConfig) -> Vec<Event> {
    let mut events = Vec::new();
    let mut start: Option<Timestamp> = None;
    let mut last_anomaly: Timestamp = 0;

    for point in points {
        if point.is_anomalous {
            if start.is_none() {
                start = Some(point.timestamp);
            }
            last_anomaly = point.timestamp;
        } else if let Some(opened) = start {
            // Beyond the merge gap: close the open event. A smaller gap
            // keeps the event open so the next run merges into it.
            if point.timestamp - last_anomaly > config.gap {
                events.push(Event::new(opened, last_anomaly));
                start = None;
            }
        }
    }

    if config.flush_open_event {
        if let Some(opened) = start {
            events.push(Event::new(opened, last_anomaly));
        }
    }

    events
}

/// Check that a sample sequence is time-ordered.
///
/// The merger itself assumes ordered input; callers decoding data from an
/// external service should validate at the boundary.
pub fn ensure_time_ordered(points: &[AnomalyPoint]) -> Result<()> {
    for pair in points.windows(2) {
        if pair[1].timestamp < pair[0].timestamp {
            return Err(EvaluationError::UnorderedInput {
                previous: pair[0].timestamp,
                current: pair[1].timestamp,
            });
        }
    }
    Ok(())
}
