//! Database row for a log entry.

use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct LogRow {
    pub id: i64,
    pub level: String,
    pub value: String,
    pub ts_ms: i64,
}
