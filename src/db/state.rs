//! Datastore connection lifecycle.

use serde::Serialize;

/// Connection lifecycle of a store, encoded as a small integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ConnectionState {
    Disconnected = 0,
    Connected = 1,
    Connecting = 2,
    Disconnecting = 3,
}

/// Labels indexed by code.
const LABELS: [&str; 4] = ["disconnected", "connected", "connecting", "disconnecting"];

impl ConnectionState {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Human label for a raw code; anything outside the known set is `"unknown"`.
pub fn status_label(code: i32) -> &'static str {
    usize::try_from(code)
        .ok()
        .and_then(|i| LABELS.get(i).copied())
        .unwrap_or("unknown")
}

/// `dbConnection` block of the status report.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ConnectionReport {
    pub code: i32,
    pub status: &'static str,
}

impl ConnectionReport {
    pub fn from_code(code: i32) -> Self {
        Self {
            code,
            status: status_label(code),
        }
    }
}
