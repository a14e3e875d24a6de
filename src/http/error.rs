//! Error mapping for the HTTP layer.
//!
//! Validation errors carry their message to the client. Storage errors are
//! logged in full and replaced by a fixed, generic message.

use crate::db::StoreError;
use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

pub const SAVE_FAILED: &str = "Failed to save log.";
pub const FETCH_FAILED: &str = "Failed to fetch logs.";

#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  Validation(String),
  #[error(transparent)]
  Storage(#[from] StoreError),
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  /// Client-facing message; storage details are logged, never returned.
  fn public_message(&self, context: &str, generic: &'static str) -> String {
    match self {
      ApiError::Validation(msg) => msg.clone(),
      ApiError::Storage(e) => {
        error!("{context} error: {e}");
        generic.to_string()
      }
    }
  }
}

/// `POST /logs` failure, rendered as `{"error": ...}`.
#[derive(Debug)]
pub struct CreateLogError(pub ApiError);

impl From<ApiError> for CreateLogError {
  fn from(e: ApiError) -> Self {
    CreateLogError(e)
  }
}

impl From<StoreError> for CreateLogError {
  fn from(e: StoreError) -> Self {
    CreateLogError(ApiError::Storage(e))
  }
}

impl IntoResponse for CreateLogError {
  fn into_response(self) -> Response {
    let status = self.0.status();
    let message = self.0.public_message("create_log", SAVE_FAILED);
    (status, Json(json!({ "error": message }))).into_response()
  }
}

/// `GET /logs/:date` failure, rendered as `{"status": "error", "message": ...}`.
#[derive(Debug)]
pub struct QueryLogsError(pub ApiError);

impl From<ApiError> for QueryLogsError {
  fn from(e: ApiError) -> Self {
    QueryLogsError(e)
  }
}

impl From<StoreError> for QueryLogsError {
  fn from(e: StoreError) -> Self {
    QueryLogsError(ApiError::Storage(e))
  }
}

impl IntoResponse for QueryLogsError {
  fn into_response(self) -> Response {
    let status = self.0.status();
    let message = self.0.public_message("logs_by_day", FETCH_FAILED);
    (status, Json(json!({ "status": "error", "message": message }))).into_response()
  }
}
