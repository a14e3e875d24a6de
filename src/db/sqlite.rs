//! SQLite-backed [`LogStore`].

use super::{ConnectionState, LogStore, StoreError, ensure_sqlite_path, run_migrations};
use crate::models::log::{log_entry::LogEntry, log_row::LogRow, new_log::NewLogEntry};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use std::sync::atomic::{AtomicI32, Ordering};
use tracing::{debug, info};

pub struct SqliteLogStore {
    pool: SqlitePool,
    state: AtomicI32,
    version: Option<String>,
}

impl SqliteLogStore {
    /// Open a pool for `db_url` and run migrations.
    ///
    /// The store reports `Connecting` until the first connection has been
    /// established and the schema is in place.
    pub async fn connect(db_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let db_url = ensure_sqlite_path(db_url);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy(&db_url)?;
        let mut store = Self {
            pool,
            state: AtomicI32::new(ConnectionState::Connecting.code()),
            version: None,
        };
        debug!("connecting to datastore");
        run_migrations(&store.pool).await?;
        store.version = sqlx::query_scalar::<_, String>("SELECT sqlite_version()")
            .fetch_one(&store.pool)
            .await
            .ok();
        store
            .state
            .store(ConnectionState::Connected.code(), Ordering::Release);
        info!(version = ?store.version, "connected to datastore");
        Ok(store)
    }
}

#[async_trait]
impl LogStore for SqliteLogStore {
    async fn insert(&self, entry: NewLogEntry) -> Result<i64, StoreError> {
        let value = serde_json::to_string(&entry.value)?;
        let res = sqlx::query("INSERT INTO logs (level, value, ts_ms) VALUES (?, ?, ?)")
            .bind(&entry.level)
            .bind(value)
            .bind(entry.timestamp.timestamp_millis())
            .execute(&self.pool)
            .await?;
        let id = res.last_insert_rowid();
        debug!(id, level = %entry.level, "stored log entry");
        Ok(id)
    }

    async fn query_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<LogEntry>, StoreError> {
        let rows: Vec<LogRow> = sqlx::query_as(
            "SELECT id, level, value, ts_ms FROM logs WHERE ts_ms >= ? AND ts_ms < ? ORDER BY ts_ms ASC, id ASC",
        )
        .bind(start.timestamp_millis())
        .bind(end.timestamp_millis())
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(LogEntry::try_from).collect()
    }

    fn connection_code(&self) -> i32 {
        if self.pool.is_closed() {
            return ConnectionState::Disconnected.code();
        }
        self.state.load(Ordering::Acquire)
    }

    fn engine_version(&self) -> Option<String> {
        self.version.clone()
    }

    async fn close(&self) {
        self.state
            .store(ConnectionState::Disconnecting.code(), Ordering::Release);
        self.pool.close().await;
        self.state
            .store(ConnectionState::Disconnected.code(), Ordering::Release);
        info!("datastore connection closed");
    }
}
