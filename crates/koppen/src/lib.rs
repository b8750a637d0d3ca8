//! Köppen-Geiger classification legend and point lookup service.

pub mod legend;
pub mod lookup;

pub use legend::{ClassCode, KoppenLegend, UNKNOWN_LABEL};
pub use lookup::{ClimateReading, ClimateService};
