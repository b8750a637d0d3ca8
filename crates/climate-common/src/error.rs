//! Error types for climate lookup operations.

use thiserror::Error;

/// Result type alias using ClimateError.
pub type ClimateResult<T> = Result<T, ClimateError>;

/// Primary error type for climate lookup operations.
///
/// The core propagates these unchanged; only the HTTP boundary translates
/// them into status codes and JSON bodies.
#[derive(Debug, Error)]
pub enum ClimateError {
    // === Request Errors ===
    #[error("You must provide 'lat' and 'lon' or 'city'.")]
    MissingParameters,

    #[error("Invalid {axis}: {value} is out of range")]
    InvalidCoordinate { axis: &'static str, value: f64 },

    #[error("City not found")]
    CityNotFound,

    // === Data Errors ===
    #[error("Data access error: {0}")]
    DataAccess(String),

    #[error("Geocoding failed: {0}")]
    Geocoding(String),

    // === Infrastructure Errors ===
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ClimateError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            ClimateError::MissingParameters | ClimateError::InvalidCoordinate { .. } => 400,

            ClimateError::CityNotFound => 404,

            ClimateError::DataAccess(_)
            | ClimateError::Geocoding(_)
            | ClimateError::Internal(_) => 500,
        }
    }
}
