//! HTTP request handlers for the climate API.

pub mod climate;
pub mod health;
pub mod landing;
pub mod legend;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use climate_common::ClimateError;

/// JSON error body shared by every failure path.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Translate a core error into a status code and JSON body.
///
/// The core stays free of transport vocabulary; this is the only place
/// error kinds meet HTTP.
pub fn error_response(err: &ClimateError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_status_mapping() {
        let response = error_response(&ClimateError::MissingParameters);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = error_response(&ClimateError::CityNotFound);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = error_response(&ClimateError::DataAccess("boom".to_string()));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_shape() {
        let body = ErrorBody {
            error: "City not found".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"City not found"}"#);
    }
}
