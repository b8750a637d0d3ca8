//! Error types for GeoTIFF raster access.

use thiserror::Error;

/// Result type for raster operations.
pub type RasterResult<T> = Result<T, RasterError>;

/// Error types for raster access.
#[derive(Debug, Error)]
pub enum RasterError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TIFF structure or decode error
    #[error("TIFF error: {0}")]
    Tiff(#[from] tiff::TiffError),

    /// Raster lacks usable georeferencing tags
    #[error("Missing georeferencing: {0}")]
    MissingGeoreferencing(String),

    /// Sample layout or type we do not read
    #[error("Unsupported raster format: {0}")]
    UnsupportedFormat(String),

    /// Computed pixel index falls outside the grid
    #[error("point ({lon}, {lat}) maps to pixel ({row}, {col}) outside the {width}x{height} grid")]
    OutOfBounds {
        lon: f64,
        lat: f64,
        row: i64,
        col: i64,
        width: u32,
        height: u32,
    },
}

impl From<RasterError> for climate_common::ClimateError {
    fn from(err: RasterError) -> Self {
        climate_common::ClimateError::DataAccess(err.to_string())
    }
}
