//! Environment-driven configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("{var} must be {expected}, got '{value}'")]
  Invalid {
    var: &'static str,
    expected: &'static str,
    value: String,
  },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  pub database_url: String,
  pub max_connections: u32,
  pub host: IpAddr,
  pub port: u16,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      database_url: "sqlite://logsink.db".to_string(),
      max_connections: 5,
      host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
      port: 3000,
    }
  }
}

impl Config {
  /// Read `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS`, `HOST` and `PORT`.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Build a config from an arbitrary variable source.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
    let defaults = Self::default();
    Ok(Self {
      database_url: lookup("DATABASE_URL")
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(defaults.database_url),
      max_connections: parse_var(&lookup, "DATABASE_MAX_CONNECTIONS", "a positive integer")?
        .filter(|n| *n > 0)
        .unwrap_or(defaults.max_connections),
      host: parse_var(&lookup, "HOST", "an IP address")?.unwrap_or(defaults.host),
      port: parse_var(&lookup, "PORT", "a port number")?.unwrap_or(defaults.port),
    })
  }

  pub fn bind_addr(&self) -> SocketAddr {
    SocketAddr::new(self.host, self.port)
  }
}

fn parse_var<T: std::str::FromStr>(
  lookup: &impl Fn(&str) -> Option<String>,
  var: &'static str,
  expected: &'static str,
) -> Result<Option<T>, ConfigError> {
  match lookup(var) {
    None => Ok(None),
    Some(raw) if raw.trim().is_empty() => Ok(None),
    Some(raw) => raw
      .trim()
      .parse()
      .map(Some)
      .map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value: raw,
      }),
  }
}
