//! Inbound create-log payload and the validated entry handed to the store.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

pub const MISSING_FIELDS: &str = "Both level and value are required.";

/// Raw `POST /logs` body. Fields stay loosely typed so validation can
/// report a single clear message instead of a deserializer error.
#[derive(Debug, Default, Deserialize)]
pub struct CreateLogRequest {
    #[serde(default)]
    pub level: Option<Value>,
    #[serde(default)]
    pub value: Option<Value>,
}

/// Entry ready to persist, timestamp assigned by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLogEntry {
    pub level: String,
    pub value: Value,
    pub timestamp: DateTime<Utc>,
}

impl CreateLogRequest {
    /// `level` must be a non-empty string. `value` must be present and
    /// non-null; falsy values such as `0`, `false` or `""` are accepted.
    pub fn validate(self, now: DateTime<Utc>) -> Result<NewLogEntry, &'static str> {
        let level = match self.level {
            Some(Value::String(s)) if !s.is_empty() => s,
            _ => return Err(MISSING_FIELDS),
        };
        let value = match self.value {
            Some(Value::Null) | None => return Err(MISSING_FIELDS),
            Some(v) => v,
        };
        Ok(NewLogEntry {
            level,
            value,
            timestamp: now,
        })
    }
}
