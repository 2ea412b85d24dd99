//! Chart overlay derivation.
//!
//! Turns annotated events and labels into step-function outlines ready to
//! be handed to a plotting layer as `(timestamp, value)` pairs. True and
//! false positives (and detected/undetected labels) are split into
//! separate series so they can be styled differently.

use evaluation_spi::{EvaluatedEvent, EvaluatedLabel, Timestamp};

/// Baseline of the event band, drawn above the label band.
const EVENT_BASELINE: f64 = 0.6;
/// Plateau of the event band.
const EVENT_PLATEAU: f64 = 1.1;
/// Plateau of the label band.
const LABEL_PLATEAU: f64 = 0.5;

/// Step outlines for detected events, split by classification.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventOverlay {
    /// Outline of true-positive events.
    pub true_positive: Vec<(Timestamp, f64)>,
    /// Outline of false-positive events.
    pub false_positive: Vec<(Timestamp, f64)>,
}

/// Step outlines for known labels, split by detection outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelOverlay {
    /// Outline of detected labels.
    pub detected: Vec<(Timestamp, f64)>,
    /// Outline of undetected (or excluded) labels.
    pub undetected: Vec<(Timestamp, f64)>,
}

fn push_step(
    series: &mut Vec<(Timestamp, f64)>,
    start: Timestamp,
    end: Timestamp,
    baseline: f64,
    plateau: f64,
) {
    series.push((start - 1, baseline));
    series.push((start, plateau));
    series.push((end, plateau));
    series.push((end + 1, baseline));
}

/// Derive the event overlay from classified events.
pub fn event_overlay(events: &[EvaluatedEvent]) -> EventOverlay {
    let mut overlay = EventOverlay::default();

    for evaluated in events {
        let series = if evaluated.true_positive {
            &mut overlay.true_positive
        } else {
            &mut overlay.false_positive
        };
        push_step(
            series,
            evaluated.event.start,
            evaluated.event.end,
            EVENT_BASELINE,
            EVENT_PLATEAU,
        );
    }

    overlay
}

/// Derive the label overlay from classified labels.
///
/// Both series are anchored at `series_start` so the plotted area starts
/// at the left edge of the chart. Labels excluded from the evaluation
/// period plot in the undetected series.
pub fn label_overlay(labels: &[EvaluatedLabel], series_start: Timestamp) -> LabelOverlay {
    let mut overlay = LabelOverlay::default();
    overlay.detected.push((series_start, 0.0));
    overlay.undetected.push((series_start, 0.0));

    for evaluated in labels {
        let series = if evaluated.detected == Some(true) {
            &mut overlay.detected
        } else {
            &mut overlay.undetected
        };
        push_step(
            series,
            evaluated.label.start,
            evaluated.label.end,
            0.0,
            LABEL_PLATEAU,
        );
    }

    overlay
}
