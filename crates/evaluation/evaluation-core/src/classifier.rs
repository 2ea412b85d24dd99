//! Event and label classifier.
//!
//! Classifies each detected event as a true or false positive against the
//! known labels, and each label as detected or undetected against the
//! events, then aggregates the counts. Both passes tolerate an event
//! occurring up to the early-warning threshold before a label.

use evaluation_api::ClassifierConfig;
use evaluation_spi::{
    EvaluatedEvent, EvaluatedLabel, Evaluation, EvaluationStats, Event, Label, Timestamp,
};

/// Strict overlap between the closed intervals `[a1, a2]` and `[b1, b2]`.
///
/// Boundary touching does not count as overlap; this mirrors the
/// convention used by the detection service's own evaluation.
fn overlaps(a1: Timestamp, a2: Timestamp, b1: Timestamp, b2: Timestamp) -> bool {
    a1 < b2 && a2 > b1
}

/// Classify events and labels and aggregate accuracy statistics.
///
/// An event is a true positive when its span, extended forward by the
/// early-warning tolerance, overlaps any label. A label is detected when
/// its window, extended backward by the same tolerance, overlaps any
/// event. Labels ending at or before `evaluation_start` are excluded from
/// the label statistics and annotated with `detected: None`.
///
/// Returns annotated copies; the input slices are never mutated. Empty
/// inputs are valid and yield zero counts.
pub fn classify(
    events: &[Event],
    labels: &[Label],
    evaluation_start: Timestamp,
    config: &ClassifierConfig,
) -> Evaluation {
    let tolerance = config.early_warning;
    let mut stats = EvaluationStats::default();

    let evaluated_events: Vec<EvaluatedEvent> = events
        .iter()
        .map(|event| {
            let true_positive = labels
                .iter()
                .any(|label| overlaps(event.start, event.end + tolerance, label.start, label.end));
            if true_positive {
                stats.true_positives += 1;
            } else {
                stats.false_positives += 1;
            }
            EvaluatedEvent {
                event: *event,
                true_positive,
            }
        })
        .collect();

    let evaluated_labels: Vec<EvaluatedLabel> = labels
        .iter()
        .map(|label| {
            // Labels entirely inside the training period do not count
            // against the detection rate.
            if label.end <= evaluation_start {
                return EvaluatedLabel {
                    label: *label,
                    detected: None,
                };
            }
            stats.num_labels += 1;

            let found = events
                .iter()
                .any(|event| overlaps(label.start - tolerance, label.end, event.start, event.end));
            if found {
                stats.detected += 1;
            } else {
                stats.undetected += 1;
            }
            EvaluatedLabel {
                label: *label,
                detected: Some(found),
            }
        })
        .collect();

    Evaluation {
        events: evaluated_events,
        labels: evaluated_labels,
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evaluation_spi::Result;

    fn config(hours: f64) -> ClassifierConfig {
        ClassifierConfig::new(hours).unwrap()
    }

    #[test]
    fn test_empty_inputs_yield_zero_counts() {
        let evaluation = classify(&[], &[], 0, &config(0.0));
        assert!(evaluation.events.is_empty());
        assert!(evaluation.labels.is_empty());
        assert_eq!(evaluation.stats, EvaluationStats::default());
    }

    #[test]
    fn test_overlapping_event_is_true_positive() {
        let events = [Event::new(1, 4)];
        let labels = [Label::new(1, 3)];
        let evaluation = classify(&events, &labels, 0, &config(0.0));

        assert!(evaluation.events[0].true_positive);
        assert_eq!(evaluation.labels[0].detected, Some(true));
        assert_eq!(evaluation.stats.true_positives, 1);
        assert_eq!(evaluation.stats.false_positives, 0);
        assert_eq!(evaluation.stats.detected, 1);
        assert_eq!(evaluation.stats.undetected, 0);
        assert_eq!(evaluation.stats.num_labels, 1);
    }

    #[test]
    fn test_disjoint_event_is_false_positive() {
        let events = [Event::new(1, 4)];
        let labels = [Label::new(20, 21)];
        let evaluation = classify(&events, &labels, 0, &config(0.0));

        assert!(!evaluation.events[0].true_positive);
        assert_eq!(evaluation.labels[0].detected, Some(false));
        assert_eq!(evaluation.stats.false_positives, 1);
        assert_eq!(evaluation.stats.undetected, 1);
        assert_eq!(evaluation.stats.num_labels, 1);
    }

    #[test]
    fn test_touching_boundary_is_not_a_match() {
        // Event ends exactly where the label starts: strict overlap says no.
        let events = [Event::new(1, 10)];
        let labels = [Label::new(10, 20)];
        let evaluation = classify(&events, &labels, 0, &config(0.0));

        assert!(!evaluation.events[0].true_positive);
        assert_eq!(evaluation.labels[0].detected, Some(false));
    }

    #[test]
    fn test_early_warning_extends_event_forward() {
        // Event ends one hour before the label; tolerance of two hours
        // stretches its effective end past the label start.
        let events = [Event::new(0, 3600)];
        let labels = [Label::new(7200, 10800)];

        let strict = classify(&events, &labels, 0, &config(0.0));
        assert!(!strict.events[0].true_positive);

        let tolerant = classify(&events, &labels, 0, &config(2.0));
        assert!(tolerant.events[0].true_positive);
        assert_eq!(tolerant.labels[0].detected, Some(true));
    }

    #[test]
    fn test_early_warning_is_monotonic() {
        let events = [Event::new(0, 100), Event::new(50_000, 50_100)];
        let labels = [Label::new(4000, 5000), Label::new(90_000, 95_000)];

        let mut previous = (0, 0);
        for hours in [0.0, 1.0, 4.0, 12.0, 48.0] {
            let evaluation = classify(&events, &labels, 0, &config(hours));
            let current = (evaluation.stats.true_positives, evaluation.stats.detected);
            assert!(current.0 >= previous.0);
            assert!(current.1 >= previous.1);
            previous = current;
        }
    }

    #[test]
    fn test_label_before_evaluation_start_is_excluded() {
        let events = [Event::new(100, 200)];
        let labels = [Label::new(10, 20), Label::new(150, 160)];
        let evaluation = classify(&events, &labels, 50, &config(0.0));

        assert_eq!(evaluation.labels[0].detected, None);
        assert_eq!(evaluation.labels[1].detected, Some(true));
        assert_eq!(evaluation.stats.num_labels, 1);
        assert_eq!(evaluation.stats.detected, 1);
        assert_eq!(evaluation.stats.undetected, 0);
    }

    #[test]
    fn test_label_ending_exactly_at_evaluation_start_is_excluded() {
        let labels = [Label::new(10, 50)];
        let evaluation = classify(&[], &labels, 50, &config(0.0));
        assert_eq!(evaluation.labels[0].detected, None);
        assert_eq!(evaluation.stats.num_labels, 0);
    }

    #[test]
    fn test_label_order_does_not_change_event_outcome() {
        let events = [Event::new(5, 15), Event::new(100, 110)];
        let labels = [Label::new(0, 4), Label::new(12, 20), Label::new(105, 106)];
        let mut reversed = labels;
        reversed.reverse();

        let forward = classify(&events, &labels, 0, &config(0.0));
        let backward = classify(&events, &reversed, 0, &config(0.0));

        for (a, b) in forward.events.iter().zip(backward.events.iter()) {
            assert_eq!(a.true_positive, b.true_positive);
        }
        assert_eq!(forward.stats.true_positives, backward.stats.true_positives);
        assert_eq!(forward.stats.detected, backward.stats.detected);
    }

    #[test]
    fn test_event_order_does_not_change_label_outcome() {
        let events = [Event::new(5, 15), Event::new(100, 110)];
        let labels = [Label::new(12, 20), Label::new(300, 400)];
        let mut reversed = events;
        reversed.reverse();

        let forward = classify(&events, &labels, 0, &config(0.0));
        let backward = classify(&reversed, &labels, 0, &config(0.0));

        for (a, b) in forward.labels.iter().zip(backward.labels.iter()) {
            assert_eq!(a.detected, b.detected);
        }
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let events = vec![Event::new(1, 2)];
        let labels = vec![Label::new(1, 2)];
        let before_events = events.clone();
        let before_labels = labels.clone();

        let _ = classify(&events, &labels, 0, &config(1.0));

        assert_eq!(events, before_events);
        assert_eq!(labels, before_labels);
    }

    #[test]
    fn test_single_incident_scenario() -> Result<()> {
        // Merged event {1, 4} against a label {1, 3}: true positive,
        // detected, one label in the denominator.
        let events = [Event::new(1, 4)];
        let labels = [Label::new(1, 3)];
        let evaluation = classify(&events, &labels, 0, &ClassifierConfig::new(0.0)?);

        assert_eq!(
            evaluation.stats,
            EvaluationStats {
                true_positives: 1,
                false_positives: 0,
                detected: 1,
                undetected: 0,
                num_labels: 1,
            }
        );
        Ok(())
    }
}
