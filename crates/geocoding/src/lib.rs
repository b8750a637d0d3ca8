//! Place-name resolution against the Nominatim geocoding API.
//!
//! The lookup core consumes a single operation: resolve a free-text place
//! name to a best-match coordinate, or report that no match exists. The
//! [`Geocoder`] trait keeps that seam narrow so the HTTP layer can
//! substitute a stub in tests; [`NominatimClient`] is the production
//! implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use climate_common::Coordinate;

/// Result type for geocoding operations.
pub type GeocodingResult<T> = Result<T, GeocodingError>;

/// Error types for place-name resolution.
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Transport-level failure talking to the provider
    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a payload we could not interpret
    #[error("invalid geocoder response: {0}")]
    InvalidResponse(String),
}

impl From<GeocodingError> for climate_common::ClimateError {
    fn from(err: GeocodingError) -> Self {
        climate_common::ClimateError::Geocoding(err.to_string())
    }
}

/// Resolve a free-text place name to a best-match coordinate.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// `Ok(None)` means the provider had no match for the name.
    async fn resolve(&self, place: &str) -> GeocodingResult<Option<Coordinate>>;
}

/// One entry of a Nominatim search response. Nominatim serializes lat/lon
/// as strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

/// Geocoder backed by the Nominatim search API.
///
/// Queries `<base>/search?format=json&limit=1` and takes whatever the
/// provider ranks first; tie-breaking between ambiguous names is
/// provider-defined.
pub struct NominatimClient {
    client: Client,
    base_url: String,
}

impl NominatimClient {
    /// Create a client for the given Nominatim base URL.
    ///
    /// Nominatim's usage policy requires an identifying user agent.
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> GeocodingResult<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl Geocoder for NominatimClient {
    async fn resolve(&self, place: &str) -> GeocodingResult<Option<Coordinate>> {
        let url = format!("{}/search", self.base_url);
        let places: Vec<NominatimPlace> = self
            .client
            .get(&url)
            .query(&[("q", place), ("format", "json"), ("limit", "1")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        best_match(place, places)
    }
}

/// Convert the provider's ranked list into a coordinate, if any.
fn best_match(
    place: &str,
    places: Vec<NominatimPlace>,
) -> GeocodingResult<Option<Coordinate>> {
    let Some(best) = places.into_iter().next() else {
        debug!(place, "no geocoder match");
        return Ok(None);
    };

    let lat: f64 = best.lat.parse().map_err(|_| {
        GeocodingError::InvalidResponse(format!("non-numeric latitude: {}", best.lat))
    })?;
    let lon: f64 = best.lon.parse().map_err(|_| {
        GeocodingError::InvalidResponse(format!("non-numeric longitude: {}", best.lon))
    })?;

    let coordinate =
        Coordinate::new(lat, lon).map_err(|e| GeocodingError::InvalidResponse(e.to_string()))?;
    debug!(place, lat, lon, "resolved place");
    Ok(Some(coordinate))
}
