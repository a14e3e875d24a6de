//! Log store: the `LogStore` seam, SQLite migrations and path handling.

pub mod sqlite;
pub mod state;

use crate::models::log::{log_entry::LogEntry, new_log::NewLogEntry};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use std::path::Path;
use thiserror::Error;

pub use sqlite::SqliteLogStore;
pub use state::ConnectionState;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("failed to encode log value: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("corrupt log row: {0}")]
    Corrupt(String),
}

/// Persistence operations the HTTP layer depends on.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// Persist one entry, returning its row id.
    async fn insert(&self, entry: NewLogEntry) -> Result<i64, StoreError>;

    /// Entries with `start <= timestamp < end`, oldest first.
    async fn query_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<LogEntry>, StoreError>;

    /// Raw connection lifecycle code, see [`ConnectionState`].
    fn connection_code(&self) -> i32;

    /// Version string reported by the datastore engine, read once at connect.
    fn engine_version(&self) -> Option<String>;

    /// Release all connections.
    async fn close(&self);
}

/// Run SQLite migrations to create tables if absent.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS logs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            level TEXT NOT NULL,
            value TEXT NOT NULL,
            ts_ms INTEGER NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS logs_ts_ms ON logs (ts_ms)")
        .execute(pool)
        .await?;
    Ok(())
}

/// Ensure SQLite file and parent folder exist for a given sqlx URL.
pub fn ensure_sqlite_path(db_url: &str) -> String {
    if !db_url.starts_with("sqlite:") {
        return db_url.to_string();
    }
    let path_part = db_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let (path_only, _) = match path_part.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (path_part, None),
    };
    if path_only.is_empty() || path_only == ":memory:" {
        return db_url.to_string();
    }
    let p = Path::new(path_only);
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            let _ = std::fs::create_dir_all(parent);
        }
    }
    let _ = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(p);
    db_url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_sqlite_urls_pass_through() {
        assert_eq!(
            ensure_sqlite_path("mysql://localhost/logs"),
            "mysql://localhost/logs"
        );
        assert_eq!(ensure_sqlite_path("sqlite::memory:"), "sqlite::memory:");
        assert_eq!(ensure_sqlite_path("sqlite://:memory:"), "sqlite://:memory:");
    }

    #[test]
    fn creates_missing_file_and_parent() {
        let dir = std::env::temp_dir().join(format!("logsink-path-{}", std::process::id()));
        let file = dir.join("nested").join("logs.db");
        let url = format!("sqlite://{}?mode=rwc", file.display());

        assert_eq!(ensure_sqlite_path(&url), url);
        assert!(file.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
