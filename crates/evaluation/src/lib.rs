//! # watchful-evaluation
//!
//! Anomaly event evaluation module for watchful-ts.
//! Merges point-wise anomaly flags into events, classifies events and
//! labels against each other, and aggregates accuracy statistics.

pub use evaluation_facade::*;
