//! Time-series points and windowing helpers.

use serde::{Deserialize, Serialize};

/// A single timestamped value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimePoint {
    /// Unix timestamp in seconds.
    pub timestamp: i64,
    /// Sampled value.
    pub value: f64,
}

impl TimePoint {
    /// Create a new time point.
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// An ordered sequence of time points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timeseries {
    /// The underlying points, ordered by timestamp.
    pub points: Vec<TimePoint>,
}

impl Timeseries {
    /// Create a time series from points.
    pub fn new(points: Vec<TimePoint>) -> Self {
        Self { points }
    }

    /// Number of points in the series.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sum of all values in the series.
    pub fn sum(&self) -> f64 {
        self.points.iter().map(|p| p.value).sum()
    }

    /// Extract the part of the series inside `[start, end]` (inclusive).
    pub fn slice_range(&self, start: i64, end: i64) -> Timeseries {
        let points = self
            .points
            .iter()
            .filter(|p| p.timestamp >= start && p.timestamp <= end)
            .copied()
            .collect();
        Timeseries::new(points)
    }

    /// Index of the first point strictly after `after`.
    ///
    /// Used to locate where the evaluation period starts inside a series
    /// that spans both training and evaluation data.
    pub fn index_after(&self, after: i64) -> Option<usize> {
        self.points.iter().position(|p| p.timestamp > after)
    }

    /// Position of the first point strictly after `after`, as a 0-100
    /// percentage of the series length.
    ///
    /// This is the initial position of a chart's data-zoom slider when the
    /// view should open on the evaluation period.
    pub fn zoom_start_percent(&self, after: i64) -> Option<u8> {
        self.index_after(after)
            .map(|index| (index as f64 / self.points.len() as f64 * 100.0).round() as u8)
    }
}
