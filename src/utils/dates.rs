//! Calendar-date parsing for query parameters.
//!
//! Dates travel as ISO-8601 calendar text (`YYYY-MM-DD`). Validity checks
//! are limited to a window of [`SUPPORTED_RANGE_YEARS`] around today.

use chrono::{Months, NaiveDate};
use serde_json::json;

use crate::error::AppError;

/// Width of the supported window on each side of today.
pub const SUPPORTED_RANGE_YEARS: u32 = 50;

/// Errors produced while reading a date from user input.
#[derive(Debug, thiserror::Error)]
pub enum DateInputError {
    #[error("Invalid date format. Please use YYYY-MM-DD format: {0}")]
    InvalidFormat(String),

    #[error("Date is outside supported range (50 years from today)")]
    OutOfRange,
}

impl From<DateInputError> for AppError {
    fn from(e: DateInputError) -> Self {
        let details = match &e {
            DateInputError::InvalidFormat(_) => json!({ "expected_format": "YYYY-MM-DD" }),
            DateInputError::OutOfRange => json!({ "max_years_from_today": SUPPORTED_RANGE_YEARS }),
        };
        AppError::bad_request(e.to_string(), details)
    }
}

/// Parses a strict `YYYY-MM-DD` date.
///
/// Month and day must be zero-padded and no surrounding whitespace is
/// allowed, so the text is always exactly 10 bytes.
///
/// # Errors
///
/// Returns [`DateInputError::InvalidFormat`] with the parser message when the
/// text is not a valid calendar date.
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, DateInputError> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(DateInputError::InvalidFormat(format!(
            "'{}' (expected 10 characters like 2007-12-03)",
            raw
        )));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| DateInputError::InvalidFormat(format!("'{}' ({})", raw, e)))
}

/// Rejects dates more than [`SUPPORTED_RANGE_YEARS`] before or after `today`.
///
/// Both boundaries are accepted.
pub fn ensure_within_supported_range(
    date: NaiveDate,
    today: NaiveDate,
) -> Result<NaiveDate, DateInputError> {
    let span = Months::new(SUPPORTED_RANGE_YEARS * 12);
    let earliest = today.checked_sub_months(span).unwrap_or(NaiveDate::MIN);
    let latest = today.checked_add_months(span).unwrap_or(NaiveDate::MAX);

    if date < earliest || date > latest {
        return Err(DateInputError::OutOfRange);
    }
    Ok(date)
}
