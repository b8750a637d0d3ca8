//! Point classification and dataset class enumeration.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use climate_common::{ClimateResult, Coordinate};
use geotiff_raster::RasterSource;

use crate::legend::{ClassCode, KoppenLegend};

/// Result of a single-point classification.
#[derive(Debug, Clone, Serialize)]
pub struct ClimateReading {
    pub latitude: f64,
    pub longitude: f64,
    pub class_code: ClassCode,
    pub climate: &'static str,
}

/// Orchestrates raster access and the class legend.
///
/// Holds no mutable state; every call opens the raster fresh, so the service
/// can be shared across request tasks without locking.
#[derive(Debug, Clone)]
pub struct ClimateService {
    raster: RasterSource,
    legend: KoppenLegend,
}

impl ClimateService {
    /// Create a service over the given raster with the full legend.
    pub fn new(raster: RasterSource) -> Self {
        Self {
            raster,
            legend: KoppenLegend::new(),
        }
    }

    /// The documented class legend.
    pub fn legend(&self) -> &KoppenLegend {
        &self.legend
    }

    /// The underlying raster source.
    pub fn raster(&self) -> &RasterSource {
        &self.raster
    }

    /// Classify the point at `coordinate`.
    ///
    /// Raster failures propagate unchanged; a read failure here is not
    /// transient, so there are no retries.
    pub fn classify(&self, coordinate: Coordinate) -> ClimateResult<ClimateReading> {
        let class_code = self.raster.sample(coordinate)?;
        let climate = self.legend.describe(class_code);
        debug!(
            lat = coordinate.lat,
            lon = coordinate.lon,
            class_code,
            climate,
            "classified point"
        );

        Ok(ClimateReading {
            latitude: coordinate.lat,
            longitude: coordinate.lon,
            class_code,
            climate,
        })
    }

    /// Labels for every class code that actually occurs in the raster,
    /// including undocumented codes as "Unknown".
    pub fn used_classes(&self) -> ClimateResult<BTreeMap<ClassCode, String>> {
        let values = self.raster.distinct_values()?;
        Ok(values
            .into_iter()
            .map(|code| (code, self.legend.describe(code).to_string()))
            .collect())
    }
}
