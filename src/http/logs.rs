//! Log ingestion and day query handlers.

use super::error::{ApiError, CreateLogError, QueryLogsError};
use crate::{
  app::AppState,
  models::{
    log::new_log::CreateLogRequest,
    response::day_logs::DayLogs,
  },
  util::{
    day::{day_bounds, parse_day},
    iso_millis,
  },
};
use axum::{
  Json,
  body::Bytes,
  extract::{Path, State, rejection::PathRejection},
  http::{HeaderMap, StatusCode, header},
  response::IntoResponse,
};
use chrono::Utc;
use serde_json::json;

/// POST /logs - persist one entry stamped with the current time.
pub async fn create_log(
  State(state): State<AppState>,
  headers: HeaderMap,
  body: Bytes,
) -> Result<impl IntoResponse, CreateLogError> {
  let req = parse_create_body(&headers, &body)?;
  let entry = req
    .validate(Utc::now())
    .map_err(|msg| ApiError::Validation(msg.to_string()))?;

  state.store.insert(entry).await?;

  Ok((StatusCode::CREATED, Json(json!({ "message": "Log saved." }))))
}

/// Decode a create-log body. A non-JSON content type or a blank body reads
/// as `{}`, so both end in the missing-fields message.
fn parse_create_body(headers: &HeaderMap, body: &[u8]) -> Result<CreateLogRequest, ApiError> {
  if !is_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
    return Ok(CreateLogRequest::default());
  }
  Json::<CreateLogRequest>::from_bytes(body)
    .map(|Json(req)| req)
    .map_err(|rej| ApiError::Validation(format!("Invalid JSON body: {}", rej.body_text())))
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
  let Some(value) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
    return false;
  };
  let essence = value.split(';').next().unwrap_or_default().trim();
  essence.eq_ignore_ascii_case("application/json")
    || essence
      .rsplit_once('+')
      .is_some_and(|(ty, suffix)| ty.starts_with("application/") && suffix.eq_ignore_ascii_case("json"))
}

/// GET /logs/:date - all entries of one UTC day (`YYYY-MM-DD`), oldest first.
pub async fn logs_by_day(
  State(state): State<AppState>,
  date: Result<Path<String>, PathRejection>,
) -> Result<Json<DayLogs>, QueryLogsError> {
  let Path(date) = date.map_err(|rej| ApiError::Validation(rej.body_text()))?;
  let day = parse_day(&date).map_err(|e| ApiError::Validation(e.to_string()))?;
  let (start, end) = day_bounds(day);

  let data = state.store.query_range(start, end).await?;

  Ok(Json(DayLogs {
    status: "success",
    timestamp: iso_millis(&Utc::now()),
    data,
  }))
}
