//! Anomaly Event Evaluation Facade
//!
//! Unified re-exports for the evaluation module.
//!
//! This facade provides a single entry point to all evaluation functionality:
//! - Models (`AnomalyPoint`, `Event`, `Label`, `EvaluationStats`) from SPI
//! - Configuration types (`MergeConfig`, `ClassifierConfig`) from API
//! - The merger, classifier and overlay derivation from Core

// Re-export everything from SPI
pub use evaluation_spi::*;

// Re-export everything from API
pub use evaluation_api::*;

// Re-export everything from Core
pub use evaluation_core::*;
