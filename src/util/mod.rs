//! Utility functions: tracing, timestamp formatting, day parsing, memory stats.

pub mod day;
pub mod memory;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize CLI logging. Safe to call more than once.
pub fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let _ = fmt()
    .with_env_filter(filter)
    .with_target(false)
    .try_init();
}

/// Format a timestamp as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
pub fn iso_millis(ts: &DateTime<Utc>) -> String {
  ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `serialize_with` helper writing timestamps via [`iso_millis`].
pub fn serialize_iso_millis<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
  s.serialize_str(&iso_millis(ts))
}
