//! Liveness probe; does not touch the content store

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub module: &'static str,
    pub version: &'static str,
}

const HEALTHY: HealthResponse = HealthResponse {
    status: "ok",
    module: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HEALTHY)
}

/// Routes mounted outside `/api`
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
