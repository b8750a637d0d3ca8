//! Fixture raster generation for tests.
//!
//! Writes small single-band GeoTIFFs with a north-up affine transform so
//! tests across the workspace can exercise real files instead of mocks.
//! Fixtures are written into temp directories at test time; nothing is
//! committed to the repository.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use tiff::encoder::{colortype, TiffEncoder};
use tiff::tags::Tag;

use crate::error::RasterResult;

/// Write a single-band u8 GeoTIFF.
///
/// `data` is row-major with row 0 at the top (northernmost); `origin` is the
/// world position of the top-left corner and `pixel_size` the per-axis cell
/// size in degrees.
pub fn write_geotiff_u8(
    path: &Path,
    width: u32,
    height: u32,
    data: &[u8],
    origin: (f64, f64),
    pixel_size: f64,
) -> RasterResult<()> {
    let file = File::create(path)?;
    let mut encoder = TiffEncoder::new(BufWriter::new(file))?;
    let mut image = encoder.new_image::<colortype::Gray8>(width, height)?;
    image
        .encoder()
        .write_tag(Tag::ModelPixelScaleTag, &[pixel_size, pixel_size, 0.0][..])?;
    image.encoder().write_tag(
        Tag::ModelTiepointTag,
        &[0.0, 0.0, 0.0, origin.0, origin.1, 0.0][..],
    )?;
    image.write_data(data)?;
    Ok(())
}

/// Write a u8 TIFF with no georeferencing tags, for negative tests.
pub fn write_plain_tiff_u8(path: &Path, width: u32, height: u32, data: &[u8]) -> RasterResult<()> {
    let file = File::create(path)?;
    let mut encoder = TiffEncoder::new(BufWriter::new(file))?;
    encoder.write_image::<colortype::Gray8>(width, height, data)?;
    Ok(())
}

/// Grid where every row is filled with one value from `classes`, cycling.
/// Each listed class occurs as long as `height >= classes.len()`.
pub fn banded_grid(width: usize, height: usize, classes: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        let class = classes[row % classes.len()];
        data.extend(std::iter::repeat(class).take(width));
    }
    data
}

/// A 36x18 global grid with 10 degree pixels anchored at (-180, 90),
/// banded over `classes`. Returns the data for verification in tests.
pub fn write_global_fixture(path: &Path, classes: &[u8]) -> RasterResult<Vec<u8>> {
    let data = banded_grid(36, 18, classes);
    write_geotiff_u8(path, 36, 18, &data, (-180.0, 90.0), 10.0)?;
    Ok(data)
}
