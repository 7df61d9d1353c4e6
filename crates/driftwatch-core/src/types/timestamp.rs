//! Timestamp type and text parsing for cutoffs.

use chrono::{NaiveDate, NaiveDateTime};

use crate::constants::{DATE_FORMAT, TIMESTAMP_FORMATS};
use crate::errors::SelectionError;

/// Naive (zone-less) point in time used for bucketing rows.
pub type Timestamp = NaiveDateTime;

/// Parse a cutoff given as text.
///
/// Accepts `YYYY-MM-DD` (midnight), `YYYY-MM-DDTHH:MM:SS` and
/// `YYYY-MM-DD HH:MM:SS`.
pub fn parse_timestamp(value: &str) -> Result<Timestamp, SelectionError> {
    let trimmed = value.trim();
    for format in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(ts);
        }
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| SelectionError::InvalidArgumentType {
            value: value.to_string(),
            message: "expected a date or timestamp".to_string(),
        })
}
