//! Geographic coordinates in decimal degrees.

use serde::{Deserialize, Serialize};

use crate::error::{ClimateError, ClimateResult};

/// A WGS84 point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in [-90, 90]
    pub lat: f64,
    /// Longitude in [-180, 180]
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lon: f64) -> ClimateResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(ClimateError::InvalidCoordinate {
                axis: "latitude",
                value: lat,
            });
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(ClimateError::InvalidCoordinate {
                axis: "longitude",
                value: lon,
            });
        }
        Ok(Self { lat, lon })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let coord = Coordinate::new(48.8566, 2.3522).unwrap();
        assert!((coord.lat - 48.8566).abs() < 1e-9);
        assert!((coord.lon - 2.3522).abs() < 1e-9);

        // Range endpoints are valid
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_latitude_out_of_range() {
        let err = Coordinate::new(90.001, 0.0).unwrap_err();
        assert!(matches!(
            err,
            ClimateError::InvalidCoordinate {
                axis: "latitude",
                ..
            }
        ));
        assert!(Coordinate::new(-120.0, 0.0).is_err());
    }

    #[test]
    fn test_longitude_out_of_range() {
        let err = Coordinate::new(0.0, 180.5).unwrap_err();
        assert!(matches!(
            err,
            ClimateError::InvalidCoordinate {
                axis: "longitude",
                ..
            }
        ));
        assert!(Coordinate::new(0.0, -200.0).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
        assert!(Coordinate::new(f64::NEG_INFINITY, 0.0).is_err());
    }
}
