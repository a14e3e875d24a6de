//! logsink library entrypoint.
//!
//! Modules:
//! - `app`: startup, configuration, shared state
//! - `http`: Axum router, handlers and error mapping
//! - `db`: the `LogStore` seam and its SQLite implementation
//! - `models`: typed records used across layers
//! - `util`: tracing, timestamps, day boundaries, memory figures

pub mod app;
pub mod db;
pub mod http;
pub mod models;
pub mod util;

/// Crate version, reported by the status endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
