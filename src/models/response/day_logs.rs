//! Response body for a day query.

use crate::models::log::log_entry::LogEntry;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DayLogs {
    pub status: &'static str,
    pub timestamp: String,
    pub data: Vec<LogEntry>,
}
