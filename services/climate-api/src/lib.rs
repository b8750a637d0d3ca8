//! Climate API Service Library
//!
//! HTTP surface for Köppen-Geiger climate classification lookups over a
//! global raster. The router is exposed here so tests can drive it without
//! binding a socket.

pub mod handlers;
pub mod state;

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the service router with middleware attached.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Service banner
        .route("/", get(handlers::landing::landing_handler))
        // Point classification
        .route("/climate", get(handlers::climate::climate_handler))
        // Full documented legend
        .route(
            "/climate/types",
            get(handlers::legend::climate_types_handler),
        )
        // Classes present in the raster
        .route("/climate/codes", get(handlers::legend::used_codes_handler))
        // Health
        .route("/health", get(handlers::health::health_handler))
        .route("/ready", get(handlers::health::ready_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
