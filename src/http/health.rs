//! Status endpoint: uptime, memory, versions and datastore state.

use crate::{
  app::AppState,
  db::state::ConnectionReport,
  models::health::status_report::{MemoryReport, StatusReport, VersionReport},
  util::{
    iso_millis,
    memory::{MemorySnapshot, mb_label},
  },
};
use axum::{Json, extract::State};
use chrono::Utc;

/// GET / - always answers 200, whatever the datastore is doing.
pub async fn status(State(state): State<AppState>) -> Json<StatusReport> {
  let mem = MemorySnapshot::capture();
  let code = state.store.connection_code();
  let sqlite = state
    .store
    .engine_version()
    .unwrap_or_else(|| "unknown".to_string());

  Json(StatusReport {
    status: "ok",
    timestamp: iso_millis(&Utc::now()),
    uptime: format!("{}s", state.started_at.elapsed().as_secs()),
    memory: MemoryReport {
      rss: mb_label(mem.rss),
      heap_total: mb_label(mem.heap_total),
      heap_used: mb_label(mem.heap_used),
    },
    versions: VersionReport {
      service: crate::VERSION,
      sqlite,
    },
    db_connection: ConnectionReport::from_code(code),
  })
}
