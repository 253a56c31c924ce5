use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Parses the calendar date carried by a backend date or timestamp string.
///
/// Accepts `YYYY-MM-DD` prefixes (`2024-03-01`, `2024-03-01T00:00:00`) and
/// RFC 3339 timestamps, which are reduced to their UTC calendar date.
#[must_use]
pub fn parse_calendar_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.naive_utc().date());
    }
    let prefix = trimmed.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}
