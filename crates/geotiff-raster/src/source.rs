//! Per-call GeoTIFF access.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::{Path, PathBuf};

use tiff::decoder::{Decoder, DecodingResult, Limits};
use tiff::tags::Tag;
use tracing::debug;

use climate_common::Coordinate;

use crate::error::{RasterError, RasterResult};
use crate::transform::GeoTransform;

/// Handle on a single-band GeoTIFF raster.
///
/// Holds only the path: every operation opens the file, reads, and releases
/// it before returning. The file is read-only at runtime, so concurrent
/// opens from parallel requests need no coordination.
#[derive(Debug, Clone)]
pub struct RasterSource {
    path: PathBuf,
}

impl RasterSource {
    /// Create a source for the raster at `path`. The file is not touched
    /// until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying raster file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored integer at the pixel containing `coordinate`.
    ///
    /// Fails if the file cannot be opened or decoded, if it lacks
    /// georeferencing, or if the computed pixel falls outside the grid.
    pub fn sample(&self, coordinate: Coordinate) -> RasterResult<i64> {
        let mut decoder = self.open()?;
        let (width, height) = decoder.dimensions()?;
        let transform = read_geo_transform(&mut decoder)?;

        let (row, col) = transform.rowcol(coordinate.lon, coordinate.lat);
        if row < 0 || col < 0 || row >= i64::from(height) || col >= i64::from(width) {
            return Err(RasterError::OutOfBounds {
                lon: coordinate.lon,
                lat: coordinate.lat,
                row,
                col,
                width,
                height,
            });
        }

        let band = decoder.read_image()?;
        let value = value_at(&band, row as usize * width as usize + col as usize)?;
        debug!(
            lat = coordinate.lat,
            lon = coordinate.lon,
            row,
            col,
            value,
            "sampled raster"
        );
        Ok(value)
    }

    /// The set of distinct values stored across the whole band.
    pub fn distinct_values(&self) -> RasterResult<BTreeSet<i64>> {
        let mut decoder = self.open()?;
        let band = decoder.read_image()?;
        let values = collect_distinct(&band)?;
        debug!(count = values.len(), "enumerated distinct raster values");
        Ok(values)
    }

    fn open(&self) -> RasterResult<Decoder<BufReader<File>>> {
        let file = File::open(&self.path)?;
        let mut decoder = Decoder::new(BufReader::new(file))?.with_limits(Limits::unlimited());
        check_single_band(&mut decoder)?;
        Ok(decoder)
    }
}

/// Reject multi-band files: band math here assumes one sample per pixel.
fn check_single_band<R: Read + Seek>(decoder: &mut Decoder<R>) -> RasterResult<()> {
    let samples = match decoder.find_tag(Tag::SamplesPerPixel)? {
        Some(value) => value.into_u64()?,
        None => 1,
    };
    if samples != 1 {
        return Err(RasterError::UnsupportedFormat(format!(
            "{samples} samples per pixel, expected a single band"
        )));
    }
    Ok(())
}

/// Build the affine transform from the file's georeferencing tags.
fn read_geo_transform<R: Read + Seek>(decoder: &mut Decoder<R>) -> RasterResult<GeoTransform> {
    let pixel_scale = find_f64_vec(decoder, Tag::ModelPixelScaleTag)?;
    let tie_point = find_f64_vec(decoder, Tag::ModelTiepointTag)?;
    if let (Some(scale), Some(tie)) = (&pixel_scale, &tie_point) {
        if let Some(transform) = GeoTransform::from_tie_point_and_scale(tie, scale) {
            return Ok(transform);
        }
        return Err(RasterError::MissingGeoreferencing(
            "degenerate ModelPixelScale/ModelTiepoint tags".to_string(),
        ));
    }

    if let Some(matrix) = find_f64_vec(decoder, Tag::ModelTransformationTag)? {
        return GeoTransform::from_transformation_matrix(&matrix).ok_or_else(|| {
            RasterError::MissingGeoreferencing(
                "ModelTransformation matrix is rotated or degenerate".to_string(),
            )
        });
    }

    Err(RasterError::MissingGeoreferencing(
        "no ModelPixelScale/ModelTiepoint or ModelTransformation tags".to_string(),
    ))
}

fn find_f64_vec<R: Read + Seek>(
    decoder: &mut Decoder<R>,
    tag: Tag,
) -> RasterResult<Option<Vec<f64>>> {
    match decoder.find_tag(tag)? {
        Some(value) => Ok(Some(value.into_f64_vec()?)),
        None => Ok(None),
    }
}

/// Stored integer at a flat band index.
fn value_at(band: &DecodingResult, index: usize) -> RasterResult<i64> {
    let value = match band {
        DecodingResult::U8(buf) => buf.get(index).copied().map(i64::from),
        DecodingResult::U16(buf) => buf.get(index).copied().map(i64::from),
        DecodingResult::U32(buf) => buf.get(index).copied().map(i64::from),
        DecodingResult::U64(buf) => match buf.get(index) {
            Some(&v) => Some(i64::try_from(v).map_err(|_| {
                RasterError::UnsupportedFormat(format!("sample value {v} exceeds i64 range"))
            })?),
            None => None,
        },
        DecodingResult::I8(buf) => buf.get(index).copied().map(i64::from),
        DecodingResult::I16(buf) => buf.get(index).copied().map(i64::from),
        DecodingResult::I32(buf) => buf.get(index).copied().map(i64::from),
        DecodingResult::I64(buf) => buf.get(index).copied(),
        _ => {
            return Err(RasterError::UnsupportedFormat(
                "floating-point samples, expected integer class codes".to_string(),
            ))
        }
    };

    value.ok_or_else(|| {
        RasterError::UnsupportedFormat(format!("band shorter than expected at index {index}"))
    })
}

/// Distinct values across the band.
fn collect_distinct(band: &DecodingResult) -> RasterResult<BTreeSet<i64>> {
    let mut values = BTreeSet::new();
    match band {
        DecodingResult::U8(buf) => values.extend(buf.iter().map(|&v| i64::from(v))),
        DecodingResult::U16(buf) => values.extend(buf.iter().map(|&v| i64::from(v))),
        DecodingResult::U32(buf) => values.extend(buf.iter().map(|&v| i64::from(v))),
        DecodingResult::U64(buf) => {
            for &v in buf {
                values.insert(i64::try_from(v).map_err(|_| {
                    RasterError::UnsupportedFormat(format!("sample value {v} exceeds i64 range"))
                })?);
            }
        }
        DecodingResult::I8(buf) => values.extend(buf.iter().map(|&v| i64::from(v))),
        DecodingResult::I16(buf) => values.extend(buf.iter().map(|&v| i64::from(v))),
        DecodingResult::I32(buf) => values.extend(buf.iter().map(|&v| i64::from(v))),
        DecodingResult::I64(buf) => values.extend(buf.iter().copied()),
        _ => {
            return Err(RasterError::UnsupportedFormat(
                "floating-point samples, expected integer class codes".to_string(),
            ))
        }
    }
    Ok(values)
}
