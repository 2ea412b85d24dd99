//! Anomaly Event Evaluation Core
//!
//! Implementations for event merging, classification and chart overlays.

mod classifier;
mod merger;
mod overlay;

pub use classifier::*;
pub use merger::*;
pub use overlay::*;
