//! Application state for the climate API.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use geocoding::{Geocoder, NominatimClient};
use geotiff_raster::RasterSource;
use koppen::ClimateService;

/// Shared application state.
pub struct AppState {
    /// Lookup core over the raster and legend.
    pub climate: Arc<ClimateService>,
    /// Place-name resolver.
    pub geocoder: Arc<dyn Geocoder>,
}

impl AppState {
    /// Create a new AppState from environment configuration.
    pub fn new() -> Result<Self> {
        // Path of the classification raster
        let raster_path = std::env::var("RASTER_PATH")
            .unwrap_or_else(|_| "koppen_geiger_0p00833333.tif".to_string());
        let raster_path = PathBuf::from(raster_path);

        // Geocoding provider
        let nominatim_url = std::env::var("NOMINATIM_URL")
            .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string());
        let user_agent =
            std::env::var("GEOCODER_USER_AGENT").unwrap_or_else(|_| "climate-api".to_string());

        if !raster_path.exists() {
            tracing::warn!(
                path = ?raster_path,
                "Raster file not found at startup; lookups will fail until it appears"
            );
        }

        let climate = ClimateService::new(RasterSource::new(&raster_path));
        let geocoder: Arc<dyn Geocoder> = Arc::new(NominatimClient::new(nominatim_url, &user_agent)?);

        Ok(Self {
            climate: Arc::new(climate),
            geocoder,
        })
    }

    /// Build state from explicit parts. Used by tests to substitute a stub
    /// geocoder and a fixture raster.
    pub fn with_parts(climate: ClimateService, geocoder: Arc<dyn Geocoder>) -> Self {
        Self {
            climate: Arc::new(climate),
            geocoder,
        }
    }
}
