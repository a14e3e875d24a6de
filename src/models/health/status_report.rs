//! Body of the `GET /` status endpoint.

use crate::db::state::ConnectionReport;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub status: &'static str,
    pub timestamp: String,
    pub uptime: String,
    pub memory: MemoryReport,
    pub versions: VersionReport,
    pub db_connection: ConnectionReport,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryReport {
    pub rss: String,
    pub heap_total: String,
    pub heap_used: String,
}

#[derive(Debug, Serialize)]
pub struct VersionReport {
    pub service: &'static str,
    pub sqlite: String,
}
