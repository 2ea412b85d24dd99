//! Wire-record decoding.
//!
//! The storage service returns items as attribute maps where every value
//! is wrapped in a type tag (`{"N": "1704067200"}`, `{"S": "1.0"}`).
//! These are decoded once here, at the boundary, into typed points;
//! business logic never sees the raw maps.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use evaluation_spi::AnomalyPoint;

use crate::TimePoint;

/// A single wire attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrValue {
    /// String attribute.
    S(String),
    /// Numeric attribute, transported as a string.
    N(String),
}

/// One record as returned by the storage service.
pub type WireItem = HashMap<String, AttrValue>;

/// Wire decoding errors.
#[derive(Debug, Clone, Error)]
pub enum WireError {
    /// A required field is absent from the item.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A field carries the wrong attribute type.
    #[error("Wrong type for field {field}: expected {expected}")]
    WrongType { field: String, expected: char },

    /// A numeric field does not parse.
    #[error("Invalid number in field {field}: {value}")]
    InvalidNumber { field: String, value: String },
}

/// Result type for wire decoding.
pub type Result<T> = std::result::Result<T, WireError>;

fn get<'a>(item: &'a WireItem, field: &str) -> Result<&'a AttrValue> {
    item.get(field)
        .ok_or_else(|| WireError::MissingField(field.to_string()))
}

fn number(item: &WireItem, field: &str) -> Result<f64> {
    match get(item, field)? {
        AttrValue::N(raw) => raw.parse().map_err(|_| WireError::InvalidNumber {
            field: field.to_string(),
            value: raw.clone(),
        }),
        AttrValue::S(_) => Err(WireError::WrongType {
            field: field.to_string(),
            expected: 'N',
        }),
    }
}

fn string_number(item: &WireItem, field: &str) -> Result<f64> {
    match get(item, field)? {
        AttrValue::S(raw) => raw.parse().map_err(|_| WireError::InvalidNumber {
            field: field.to_string(),
            value: raw.clone(),
        }),
        AttrValue::N(_) => Err(WireError::WrongType {
            field: field.to_string(),
            expected: 'S',
        }),
    }
}

fn timestamp(item: &WireItem) -> Result<i64> {
    Ok(number(item, "timestamp")? as i64)
}

/// Decode anomaly-mask items into [`AnomalyPoint`]s.
///
/// Expects a numeric `timestamp` (unix seconds) and a stringly-typed
/// `anomaly` flag where `1.0` marks an anomalous sample.
pub fn decode_anomaly_points(items: &[WireItem]) -> Result<Vec<AnomalyPoint>> {
    items
        .iter()
        .map(|item| {
            let flag = string_number(item, "anomaly")?;
            Ok(AnomalyPoint::new(timestamp(item)?, flag == 1.0))
        })
        .collect()
}

/// Decode items carrying a named value field into [`TimePoint`]s.
pub fn decode_time_points(items: &[WireItem], field: &str) -> Result<Vec<TimePoint>> {
    items
        .iter()
        .map(|item| Ok(TimePoint::new(timestamp(item)?, string_number(item, field)?)))
        .collect()
}
