//! Common types shared across the climate lookup services.

pub mod coordinate;
pub mod error;

pub use coordinate::Coordinate;
pub use error::{ClimateError, ClimateResult};
