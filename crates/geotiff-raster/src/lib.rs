//! GeoTIFF raster access for point sampling and value enumeration.
//!
//! Wraps the `tiff` codec with the two operations the climate lookup needs:
//! read the integer stored at the pixel containing a coordinate, and
//! enumerate the distinct values across the band. Every operation opens the
//! file fresh and releases it on return, so sources can be shared across
//! request tasks without coordination.

pub mod error;
pub mod source;
pub mod testdata;
pub mod transform;

pub use error::{RasterError, RasterResult};
pub use source::RasterSource;
pub use transform::GeoTransform;
