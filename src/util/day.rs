//! Calendar-day tokens and their UTC boundaries.
//!
//! A day token is an ISO calendar date, `YYYY-MM-DD`, zero-padded. The
//! boundary of a day is the half-open interval `[00:00:00.000, next day
//! 00:00:00.000)` in UTC.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DayParseError {
  #[error("invalid date format '{0}', expected YYYY-MM-DD")]
  Format(String),
  #[error("'{0}' is not a valid calendar date")]
  Calendar(String),
}

/// Parse a strict `YYYY-MM-DD` token.
pub fn parse_day(token: &str) -> Result<NaiveDate, DayParseError> {
  let bytes = token.as_bytes();
  let shape_ok = bytes.len() == 10
    && bytes.iter().enumerate().all(|(i, b)| match i {
      4 | 7 => *b == b'-',
      _ => b.is_ascii_digit(),
    });
  if !shape_ok {
    return Err(DayParseError::Format(token.to_string()));
  }
  NaiveDate::parse_from_str(token, "%Y-%m-%d")
    .map_err(|_| DayParseError::Calendar(token.to_string()))
}

/// UTC start (inclusive) and end (exclusive) of a calendar day.
pub fn day_bounds(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
  let start = day.and_time(chrono::NaiveTime::MIN).and_utc();
  let end = start + chrono::Duration::days(1);
  (start, end)
}
