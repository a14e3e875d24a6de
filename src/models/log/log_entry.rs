//! API representation of a stored log entry.

use super::log_row::LogRow;
use crate::db::StoreError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// A log entry as returned to clients; the row id is never exposed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub level: String,
    pub value: Value,
    #[serde(serialize_with = "crate::util::serialize_iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl TryFrom<LogRow> for LogEntry {
    type Error = StoreError;

    fn try_from(row: LogRow) -> Result<Self, Self::Error> {
        let value = serde_json::from_str(&row.value)
            .map_err(|e| StoreError::Corrupt(format!("row {}: value: {e}", row.id)))?;
        let timestamp = DateTime::from_timestamp_millis(row.ts_ms)
            .ok_or_else(|| StoreError::Corrupt(format!("row {}: timestamp {}", row.id, row.ts_ms)))?;
        Ok(LogEntry {
            level: row.level,
            value,
            timestamp,
        })
    }
}
