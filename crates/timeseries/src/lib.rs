//! # watchful-timeseries
//!
//! Typed time-series support for the watchful-ts dashboard backend:
//! value/timestamp points, the windowing helpers the charting screens use
//! (range extraction, zoom offsets, evaluation-window lookup), and a typed
//! decoder for the attribute-map records returned by the storage service.
//!
//! ## Example
//!
//! ```rust
//! use timeseries::{TimePoint, Timeseries};
//!
//! let series = Timeseries::new(vec![
//!     TimePoint::new(0, 1.0),
//!     TimePoint::new(60, 2.0),
//!     TimePoint::new(120, 4.0),
//! ]);
//! assert_eq!(series.sum(), 7.0);
//! assert_eq!(series.slice_range(30, 120).len(), 2);
//! ```

mod point;
pub mod wire;

pub use point::{TimePoint, Timeseries};
pub use wire::{AttrValue, WireError, WireItem};
