//! HTTP router and handlers.

use crate::app::AppState;
use axum::{
  Json, Router,
  http::{HeaderName, Method, StatusCode, header},
  response::IntoResponse,
  routing::{get, post},
};
use serde_json::json;
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

pub mod error;
pub mod health;
pub mod logs;

/// Methods advertised to cross-origin callers.
const CORS_METHODS: [Method; 6] = [
  Method::GET,
  Method::POST,
  Method::PUT,
  Method::PATCH,
  Method::DELETE,
  Method::OPTIONS,
];

const CORS_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::AUTHORIZATION];

/// Any origin, no credentials. Preflight on every path is answered here.
pub fn cors_layer() -> CorsLayer {
  CorsLayer::new()
    .allow_origin(Any)
    .allow_methods(CORS_METHODS)
    .allow_headers(CORS_HEADERS)
}

/// Assemble the HTTP router with all routes.
pub fn build_router(state: AppState) -> Router {
  Router::new()
    .route("/", get(health::status).fallback(method_not_allowed))
    .route("/logs", post(logs::create_log).fallback(method_not_allowed))
    .route("/logs/:date", get(logs::logs_by_day).fallback(method_not_allowed))
    .fallback(not_found)
    .layer(TraceLayer::new_for_http())
    .layer(cors_layer())
    .with_state(state)
}

async fn not_found() -> impl IntoResponse {
  (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found." })))
}

async fn method_not_allowed() -> impl IntoResponse {
  (
    StatusCode::METHOD_NOT_ALLOWED,
    Json(json!({ "error": "Method not allowed." })),
  )
}
