//! Integration tests for GeoTIFF point sampling and value enumeration.

use std::collections::BTreeSet;

use tempfile::tempdir;

use climate_common::Coordinate;
use geotiff_raster::{testdata, RasterError, RasterSource};

#[test]
fn test_sample_known_cells() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("global.tif");
    let data = testdata::write_global_fixture(&path, &[1, 4, 15, 29]).unwrap();

    let source = RasterSource::new(&path);

    // (0, 0) falls in row 9, col 18 of the 10 degree grid
    let value = source.sample(Coordinate::new(0.0, 0.0).unwrap()).unwrap();
    assert_eq!(value, i64::from(data[9 * 36 + 18]));

    // Just north of the equator stays in row 8
    let value = source.sample(Coordinate::new(0.5, 0.5).unwrap()).unwrap();
    assert_eq!(value, i64::from(data[8 * 36 + 18]));

    // Top-left cell
    let value = source
        .sample(Coordinate::new(89.9, -179.9).unwrap())
        .unwrap();
    assert_eq!(value, i64::from(data[0]));
}

#[test]
fn test_sample_is_deterministic() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("global.tif");
    testdata::write_global_fixture(&path, &[1, 4, 15, 29]).unwrap();

    let source = RasterSource::new(&path);
    let coordinate = Coordinate::new(-33.9, 18.4).unwrap();

    let first = source.sample(coordinate).unwrap();
    let second = source.sample(coordinate).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_point_outside_coverage_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("regional.tif");
    // 10x10 grid of 1 degree pixels covering lon [0, 10), lat (40, 50]
    let data = testdata::banded_grid(10, 10, &[7]);
    testdata::write_geotiff_u8(&path, 10, 10, &data, (0.0, 50.0), 1.0).unwrap();

    let source = RasterSource::new(&path);

    // West of the raster: negative column, not a silent default
    let err = source
        .sample(Coordinate::new(45.0, -5.0).unwrap())
        .unwrap_err();
    assert!(matches!(err, RasterError::OutOfBounds { .. }));

    // South of the raster: row past the edge
    let err = source
        .sample(Coordinate::new(30.0, 5.0).unwrap())
        .unwrap_err();
    assert!(matches!(err, RasterError::OutOfBounds { .. }));

    // Inside coverage still works
    assert_eq!(source.sample(Coordinate::new(45.0, 5.0).unwrap()).unwrap(), 7);
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempdir().unwrap();
    let source = RasterSource::new(dir.path().join("no-such-raster.tif"));

    let err = source.sample(Coordinate::new(0.0, 0.0).unwrap()).unwrap_err();
    assert!(matches!(err, RasterError::Io(_)));

    let err = source.distinct_values().unwrap_err();
    assert!(matches!(err, RasterError::Io(_)));
}

#[test]
fn test_ungeoreferenced_tiff_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plain.tif");
    let data = testdata::banded_grid(4, 4, &[1]);
    testdata::write_plain_tiff_u8(&path, 4, 4, &data).unwrap();

    let err = RasterSource::new(&path)
        .sample(Coordinate::new(0.0, 0.0).unwrap())
        .unwrap_err();
    assert!(matches!(err, RasterError::MissingGeoreferencing(_)));
}

#[test]
fn test_distinct_values_matches_written_classes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("global.tif");
    testdata::write_global_fixture(&path, &[1, 4, 15, 29]).unwrap();

    let values = RasterSource::new(&path).distinct_values().unwrap();
    let expected: BTreeSet<i64> = [1, 4, 15, 29].into_iter().collect();
    assert_eq!(values, expected);
}

#[test]
fn test_distinct_values_single_class() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("uniform.tif");
    let data = testdata::banded_grid(8, 8, &[26]);
    testdata::write_geotiff_u8(&path, 8, 8, &data, (0.0, 8.0), 1.0).unwrap();

    let values = RasterSource::new(&path).distinct_values().unwrap();
    assert_eq!(values, BTreeSet::from([26]));
}
