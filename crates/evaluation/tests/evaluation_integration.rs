//! Integration tests for watchful-evaluation

use evaluation::{
    classify, merge_anomaly_points, AnomalyPoint, ClassifierConfig, Event, EvaluationStats, Label,
    MergeConfig,
};

fn sample_points() -> Vec<AnomalyPoint> {
    vec![
        AnomalyPoint::new(0, false),
        AnomalyPoint::new(1, true),
        AnomalyPoint::new(2, true),
        AnomalyPoint::new(4, true),
        AnomalyPoint::new(10, false),
    ]
}

/// Merge gap covering a 1-second hole but not a 6-second one.
fn sample_merge_config() -> MergeConfig {
    MergeConfig {
        gap: 2,
        flush_open_event: true,
    }
}

#[test]
fn test_merge_then_classify_detected_incident() {
    let events = merge_anomaly_points(&sample_points(), &sample_merge_config());
    assert_eq!(events, vec![Event::new(1, 4)]);

    let labels = [Label::new(1, 3)];
    let evaluation = classify(&events, &labels, 0, &ClassifierConfig::default());

    assert!(evaluation.events[0].true_positive);
    assert_eq!(evaluation.labels[0].detected, Some(true));
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
}

#[test]
fn test_merge_then_classify_missed_incident() {
    let events = merge_anomaly_points(&sample_points(), &sample_merge_config());

    let labels = [Label::new(20, 21)];
    let evaluation = classify(&events, &labels, 0, &ClassifierConfig::default());

    assert!(!evaluation.events[0].true_positive);
    assert_eq!(evaluation.labels[0].detected, Some(false));
    assert_eq!(evaluation.stats.false_positives, 1);
    assert_eq!(evaluation.stats.undetected, 1);
    assert_eq!(evaluation.stats.num_labels, 1);
}

#[test]
fn test_merge_gap_splits_distant_runs() {
    let points = vec![
        AnomalyPoint::new(0, true),
        AnomalyPoint::new(10, false),
        AnomalyPoint::new(100, true),
        AnomalyPoint::new(110, false),
    ];
    let config = MergeConfig {
        gap: 5,
        flush_open_event: true,
    };
    let events = merge_anomaly_points(&points, &config);
    assert_eq!(events, vec![Event::new(0, 0), Event::new(100, 100)]);

    // Non-overlap invariant across the pipeline output.
    for pair in events.windows(2) {
        assert!(pair[0].end < pair[1].start);
    }
}

#[test]
fn test_slider_style_reevaluation_is_pure() {
    // The UI re-runs merge + classify whenever a threshold slider moves;
    // repeated calls over the same inputs must agree.
    let points = sample_points();
    let labels = vec![Label::new(1, 3)];

    let first = {
        let events = merge_anomaly_points(&points, &sample_merge_config());
        classify(&events, &labels, 0, &ClassifierConfig::default())
    };
    let second = {
        let events = merge_anomaly_points(&points, &sample_merge_config());
        classify(&events, &labels, 0, &ClassifierConfig::default())
    };

    assert_eq!(first, second);
}

#[test]
fn test_stats_serialize_for_api_payloads() {
    let events = merge_anomaly_points(&sample_points(), &sample_merge_config());
    let evaluation = classify(&events, &[Label::new(1, 3)], 0, &ClassifierConfig::default());

    let json = serde_json::to_value(&evaluation.stats).unwrap();
    assert_eq!(json["true_positives"], 1);
    assert_eq!(json["num_labels"], 1);
}
