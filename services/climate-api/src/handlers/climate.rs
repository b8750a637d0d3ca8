//! Point classification handler.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use climate_common::{ClimateError, ClimateResult, Coordinate};
use koppen::ClimateReading;

use crate::state::AppState;

use super::error_response;

/// Query parameters for the climate endpoint.
#[derive(Debug, Deserialize)]
pub struct ClimateQueryParams {
    /// Latitude in decimal degrees.
    pub lat: Option<f64>,

    /// Longitude in decimal degrees.
    pub lon: Option<f64>,

    /// Free-text place name; takes precedence over lat/lon.
    pub city: Option<String>,
}

/// GET /climate - Classify the point given by coordinates or a city name.
pub async fn climate_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<ClimateQueryParams>,
) -> Response {
    match classify(state, params).await {
        Ok(reading) => Json(reading).into_response(),
        Err(err) => error_response(&err),
    }
}

async fn classify(
    state: Arc<AppState>,
    params: ClimateQueryParams,
) -> ClimateResult<ClimateReading> {
    let coordinate = resolve_coordinate(&state, &params).await?;

    // The raster scan is synchronous file I/O; keep it off the async workers.
    let climate = Arc::clone(&state.climate);
    tokio::task::spawn_blocking(move || climate.classify(coordinate))
        .await
        .map_err(|e| ClimateError::Internal(format!("classification task failed: {e}")))?
}

/// A non-empty city short-circuits lat/lon even when both are present.
async fn resolve_coordinate(
    state: &AppState,
    params: &ClimateQueryParams,
) -> ClimateResult<Coordinate> {
    if let Some(city) = params.city.as_deref().filter(|c| !c.trim().is_empty()) {
        return state
            .geocoder
            .resolve(city)
            .await?
            .ok_or(ClimateError::CityNotFound);
    }

    match (params.lat, params.lon) {
        (Some(lat), Some(lon)) => Coordinate::new(lat, lon),
        _ => Err(ClimateError::MissingParameters),
    }
}
