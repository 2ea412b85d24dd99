//! Basic example demonstrating anomaly event evaluation
//!
//! Run with: cargo run --example basic -p evaluation

use evaluation::{classify, merge_anomaly_points, AnomalyPoint, ClassifierConfig, Label, MergeConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== watchful-evaluation Basic Example ===\n");

    // One day of hourly samples with two anomalous episodes
    let mut points = Vec::new();
    for hour in 0..24 {
        let anomalous = (6..9).contains(&hour) || (18..20).contains(&hour);
        points.push(AnomalyPoint::new(hour * 3600, anomalous));
    }

    // A known incident from 07:00 to 10:00
    let labels = vec![Label::new(7 * 3600, 10 * 3600)];

    // 1. Merge the point-wise mask into events
    println!("1. Merging with a 1-hour gap threshold");
    let merge_config = MergeConfig::new(1.0)?;
    let events = merge_anomaly_points(&points, &merge_config);
    for event in &events {
        println!("   Event: {} -> {}", event.start, event.end);
    }

    // 2. Classify against the known incident
    println!("\n2. Classifying with a 2-hour early-warning tolerance");
    let classifier_config = ClassifierConfig::new(2.0)?;
    let evaluation = classify(&events, &labels, 0, &classifier_config);

    for evaluated in &evaluation.events {
        println!(
            "   Event {} -> {}: true positive = {}",
            evaluated.event.start, evaluated.event.end, evaluated.true_positive
        );
    }
    for evaluated in &evaluation.labels {
        println!(
            "   Label {} -> {}: detected = {:?}",
            evaluated.label.start, evaluated.label.end, evaluated.detected
        );
    }

    // 3. Aggregate statistics
    println!("\n3. Statistics");
    println!("   {:?}", evaluation.stats);
    if let Some(precision) = evaluation.stats.precision() {
        println!("   Precision: {:.0}%", precision * 100.0);
    }
    if let Some(rate) = evaluation.stats.detection_rate() {
        println!("   Detection rate: {:.0}%", rate * 100.0);
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
