//! Legend enumeration handlers.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::Extension,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use climate_common::ClimateError;
use koppen::ClassCode;

use crate::state::AppState;

use super::error_response;

/// Full documented legend payload.
#[derive(Debug, Serialize)]
pub struct KoppenClassesResponse {
    pub koppen_classes: BTreeMap<ClassCode, &'static str>,
}

/// Codes actually present in the raster.
#[derive(Debug, Serialize)]
pub struct UsedClassesResponse {
    pub used_classes: BTreeMap<ClassCode, String>,
}

/// GET /climate/types - Every documented class, independent of the raster.
pub async fn climate_types_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<KoppenClassesResponse> {
    Json(KoppenClassesResponse {
        koppen_classes: state.climate.legend().entries().clone(),
    })
}

/// GET /climate/codes - Classes that occur in the raster dataset.
pub async fn used_codes_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    // Scans the full band; keep it off the async workers.
    let climate = Arc::clone(&state.climate);
    let result = tokio::task::spawn_blocking(move || climate.used_classes())
        .await
        .map_err(|e| ClimateError::Internal(format!("class scan task failed: {e}")))
        .and_then(|r| r);

    match result {
        Ok(used_classes) => Json(UsedClassesResponse { used_classes }).into_response(),
        Err(err) => error_response(&err),
    }
}
