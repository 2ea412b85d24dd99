//! # watchful-cli
//!
//! Command-line interface for the watchful-ts evaluation library.

use clap::{Parser, Subcommand};
use evaluation::{
    classify, ensure_time_ordered, merge_anomaly_points, AnomalyPoint, ClassifierConfig, Label,
    MergeConfig,
};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use timeseries::wire::decode_anomaly_points;
use timeseries::WireItem;

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "watchful")]
#[command(about = "Anomaly event evaluation CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate detected anomalies against known incident labels
    Evaluate {
        /// Points file (CSV `timestamp,anomaly` or JSON)
        #[arg(short, long)]
        points: PathBuf,

        /// Labels file (JSON array of {start, end})
        #[arg(short, long)]
        labels: PathBuf,

        /// Merge-gap threshold in hours
        #[arg(short, long, default_value = "0.0")]
        merge_gap: f64,

        /// Early-warning tolerance in hours
        #[arg(short, long, default_value = "0.0")]
        early_warning: f64,

        /// Evaluation period start (unix seconds); labels ending before
        /// this are excluded from the statistics
        #[arg(long, default_value = "0")]
        evaluation_start: i64,

        /// Output file for stats JSON (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Merge point-wise anomalies into events and print them
    Merge {
        /// Points file (CSV `timestamp,anomaly` or JSON)
        #[arg(short, long)]
        points: PathBuf,

        /// Merge-gap threshold in hours
        #[arg(short, long, default_value = "0.0")]
        merge_gap: f64,
    },
}

/// Load anomaly points from a CSV file with `timestamp,anomaly` columns.
fn load_csv_points(path: &PathBuf) -> CliResult<Vec<AnomalyPoint>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| format!("Failed to read headers: {}", e))?
        .clone();
    let timestamp_idx = headers
        .iter()
        .position(|h| h == "timestamp")
        .ok_or_else(|| "Column 'timestamp' not found".to_string())?;
    let anomaly_idx = headers
        .iter()
        .position(|h| h == "anomaly")
        .ok_or_else(|| "Column 'anomaly' not found".to_string())?;

    let mut points = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| format!("Failed to read record: {}", e))?;
        let timestamp: i64 = record
            .get(timestamp_idx)
            .and_then(|v| v.trim().parse().ok())
            .ok_or_else(|| "Invalid timestamp value".to_string())?;
        let flag: f64 = record
            .get(anomaly_idx)
            .and_then(|v| v.trim().parse().ok())
            .ok_or_else(|| "Invalid anomaly value".to_string())?;
        points.push(AnomalyPoint::new(timestamp, flag == 1.0));
    }

    if points.is_empty() {
        return Err("No points found in input".to_string());
    }

    Ok(points)
}

/// Load anomaly points from a JSON file.
///
/// Accepts either plain points (`[{"timestamp": 0, "is_anomalous": true}]`)
/// or the storage service's attribute-map records.
fn load_json_points(path: &PathBuf) -> CliResult<Vec<AnomalyPoint>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let reader = BufReader::new(file);
    let json: serde_json::Value =
        serde_json::from_reader(reader).map_err(|e| format!("Failed to parse JSON: {}", e))?;

    if let Ok(points) = serde_json::from_value::<Vec<AnomalyPoint>>(json.clone()) {
        if !points.is_empty() {
            return Ok(points);
        }
    }

    let items: Vec<WireItem> =
        serde_json::from_value(json).map_err(|e| format!("Unrecognized points format: {}", e))?;
    let points = decode_anomaly_points(&items).map_err(|e| e.to_string())?;

    if points.is_empty() {
        return Err("No points found in input".to_string());
    }

    Ok(points)
}

/// Load points from file (auto-detect format).
fn load_points(path: &PathBuf) -> CliResult<Vec<AnomalyPoint>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let points = match ext.as_str() {
        "csv" => load_csv_points(path),
        "json" => load_json_points(path),
        _ => load_csv_points(path).or_else(|_| load_json_points(path)),
    }?;

    ensure_time_ordered(&points).map_err(|e| e.to_string())?;
    Ok(points)
}

/// Load incident labels from a JSON file.
fn load_labels(path: &PathBuf) -> CliResult<Vec<Label>> {
    let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| format!("Failed to parse labels: {}", e))
}

/// Run evaluate command
fn run_evaluate(
    points_path: PathBuf,
    labels_path: PathBuf,
    merge_gap: f64,
    early_warning: f64,
    evaluation_start: i64,
    output: Option<PathBuf>,
) -> CliResult<()> {
    let points = load_points(&points_path)?;
    let labels = load_labels(&labels_path)?;
    println!(
        "Loaded {} points and {} labels",
        points.len(),
        labels.len()
    );

    let merge_config = MergeConfig::new(merge_gap).map_err(|e| e.to_string())?;
    let classifier_config = ClassifierConfig::new(early_warning).map_err(|e| e.to_string())?;

    let events = merge_anomaly_points(&points, &merge_config);
    let evaluation = classify(&events, &labels, evaluation_start, &classifier_config);
    let stats = evaluation.stats;

    println!("Events: {}", evaluation.events.len());
    println!(
        "  True positives:  {}",
        stats.true_positives
    );
    println!("  False positives: {}", stats.false_positives);
    println!("Labels in evaluation period: {}", stats.num_labels);
    println!("  Detected:   {}", stats.detected);
    println!("  Undetected: {}", stats.undetected);
    match stats.precision() {
        Some(precision) => println!("Precision: {:.1}%", precision * 100.0),
        None => println!("Precision: no events"),
    }
    match stats.detection_rate() {
        Some(rate) => println!("Detection rate: {:.1}%", rate * 100.0),
        None => println!("Detection rate: no labels"),
    }

    if let Some(path) = output {
        let json = serde_json::json!({
            "events": evaluation.events,
            "labels": evaluation.labels,
            "stats": stats,
        });
        let mut file =
            File::create(&path).map_err(|e| format!("Failed to create output: {}", e))?;
        serde_json::to_writer_pretty(&mut file, &json)
            .map_err(|e| format!("Failed to write JSON: {}", e))?;
        println!("Results written to {:?}", path);
    }

    Ok(())
}

/// Run merge command
fn run_merge(points_path: PathBuf, merge_gap: f64) -> CliResult<()> {
    let points = load_points(&points_path)?;
    let config = MergeConfig::new(merge_gap).map_err(|e| e.to_string())?;
    let events = merge_anomaly_points(&points, &config);

    println!("Merged {} points into {} events", points.len(), events.len());
    for event in &events {
        println!("  {} -> {}", event.start, event.end);
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evaluate {
            points,
            labels,
            merge_gap,
            early_warning,
            evaluation_start,
            output,
        } => run_evaluate(
            points,
            labels,
            merge_gap,
            early_warning,
            evaluation_start,
            output,
        ),
        Commands::Merge { points, merge_gap } => run_merge(points, merge_gap),
    };

    if let Err(message) = result {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}
