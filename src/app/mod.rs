//! Application setup and runtime.

pub mod config;

use crate::db::{LogStore, SqliteLogStore, StoreError};
use crate::http;
use config::{Config, ConfigError};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tokio::signal;
use tracing::info;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn LogStore>,
  pub started_at: Instant,
}

impl AppState {
  pub fn new(store: Arc<dyn LogStore>) -> Self {
    Self {
      store,
      started_at: Instant::now(),
    }
  }
}

#[derive(Debug, Error)]
pub enum StartupError {
  #[error("configuration error: {0}")]
  Config(#[from] ConfigError),
  #[error("could not connect to datastore: {0}")]
  Store(#[from] StoreError),
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

/// Connect to the datastore, then serve HTTP until a shutdown signal.
///
/// A datastore that cannot be reached is fatal: the error is returned
/// before any listener is bound.
pub async fn run() -> Result<(), StartupError> {
  crate::util::init_tracing();

  let config = Config::from_env()?;
  let store = Arc::new(SqliteLogStore::connect(&config.database_url, config.max_connections).await?);
  let state = AppState::new(store.clone());

  let app = http::build_router(state);

  let addr = config.bind_addr();
  let listener = tokio::net::TcpListener::bind(addr).await?;
  info!("listening on http://{}", listener.local_addr()?);

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  store.close().await;
  info!("server shut down");
  Ok(())
}

/// Resolve on SIGINT, or SIGTERM on unix.
async fn shutdown_signal() {
  let ctrl_c = async {
    if let Err(e) = signal::ctrl_c().await {
      tracing::warn!("failed to listen for ctrl-c: {e}");
      std::future::pending::<()>().await;
    }
  };

  #[cfg(unix)]
  let terminate = async {
    match signal::unix::signal(signal::unix::SignalKind::terminate()) {
      Ok(mut sig) => {
        sig.recv().await;
      }
      Err(e) => {
        tracing::warn!("failed to listen for SIGTERM: {e}");
        std::future::pending::<()>().await;
      }
    }
  };

  #[cfg(not(unix))]
  let terminate = std::future::pending::<()>();

  tokio::select! {
    _ = ctrl_c => info!("received SIGINT, shutting down"),
    _ = terminate => info!("received SIGTERM, shutting down"),
  }
}
