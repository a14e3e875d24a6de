//! Process memory figures for the status endpoint.
//!
//! All figures come from `/proc/self/status`. `rss` is `VmRSS`, `heap_total`
//! is the data segment (`VmData`) and `heap_used` is resident anonymous
//! memory (`RssAnon`). Platforms without procfs report zeros.

/// Byte counts captured at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemorySnapshot {
  pub rss: u64,
  pub heap_total: u64,
  pub heap_used: u64,
}

impl MemorySnapshot {
  /// Parse a `/proc/<pid>/status` dump.
  pub fn from_status(status: &str) -> Self {
    Self {
      rss: status_kib(status, "VmRSS").unwrap_or(0) * 1024,
      heap_total: status_kib(status, "VmData").unwrap_or(0) * 1024,
      heap_used: status_kib(status, "RssAnon").unwrap_or(0) * 1024,
    }
  }

  /// Snapshot of the current process.
  pub fn capture() -> Self {
    Self::from_status(&std::fs::read_to_string("/proc/self/status").unwrap_or_default())
  }
}

/// Read a `Key:   123 kB` line from a `/proc/<pid>/status` dump.
fn status_kib(status: &str, key: &str) -> Option<u64> {
  status.lines().find_map(|line| {
    let rest = line.strip_prefix(key)?.strip_prefix(':')?;
    rest.split_whitespace().next()?.parse().ok()
  })
}

/// Bytes to whole megabytes, rounded half up.
pub fn to_megabytes(bytes: u64) -> u64 {
  const MB: u64 = 1024 * 1024;
  (bytes + MB / 2) / MB
}

/// Human-readable `"<n> MB"` label.
pub fn mb_label(bytes: u64) -> String {
  format!("{} MB", to_megabytes(bytes))
}
