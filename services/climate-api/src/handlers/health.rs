//! Health handlers.

use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::Response, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub raster: String,
}

/// GET /health - Basic health check
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /ready - Readiness check (verifies the raster file is present)
pub async fn ready_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let raster_path = state.climate.raster().path();
    let raster_status = if raster_path.exists() {
        "ok".to_string()
    } else {
        format!("missing: {}", raster_path.display())
    };

    let is_ready = raster_status == "ok";

    let response = ReadyResponse {
        ready: is_ready,
        raster: raster_status,
    };

    let status = if is_ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let json = serde_json::to_string(&response).unwrap_or_default();

    Response::builder()
        .status(status)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(json.into())
        .unwrap()
}
