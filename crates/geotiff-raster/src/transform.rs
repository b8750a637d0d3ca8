//! Affine georeferencing for axis-aligned rasters.

/// Affine transform between pixel indices and world coordinates.
///
/// Only axis-aligned (unrotated) rasters are supported; global climate grids
/// are north-up, so the transform reduces to an origin and per-axis pixel
/// sizes. `pixel_height` is negative for north-up data (row index grows
/// southward while latitude decreases).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoTransform {
    /// X coordinate of the outer corner of pixel (0, 0)
    pub origin_x: f64,
    /// Y coordinate of the outer corner of pixel (0, 0)
    pub origin_y: f64,
    /// Pixel width in CRS units
    pub pixel_width: f64,
    /// Pixel height in CRS units (negative for north-up rasters)
    pub pixel_height: f64,
}

impl GeoTransform {
    /// Derive the transform from GeoTIFF ModelTiepoint + ModelPixelScale tags.
    ///
    /// The tiepoint anchors raster position (i, j) to world position (x, y);
    /// the scale gives per-axis pixel sizes with the GeoTIFF convention that
    /// the Y scale is stored positive for north-up data.
    pub fn from_tie_point_and_scale(tie_point: &[f64], pixel_scale: &[f64]) -> Option<Self> {
        if tie_point.len() < 6 || pixel_scale.len() < 2 {
            return None;
        }
        let (i, j, x, y) = (tie_point[0], tie_point[1], tie_point[3], tie_point[4]);
        let (scale_x, scale_y) = (pixel_scale[0], pixel_scale[1]);
        if scale_x == 0.0 || scale_y == 0.0 {
            return None;
        }

        Some(Self {
            origin_x: x - i * scale_x,
            origin_y: y + j * scale_y,
            pixel_width: scale_x,
            pixel_height: -scale_y,
        })
    }

    /// Derive the transform from a GeoTIFF ModelTransformation 4x4 matrix.
    ///
    /// Returns `None` for short or rotated/skewed matrices.
    pub fn from_transformation_matrix(matrix: &[f64]) -> Option<Self> {
        if matrix.len() < 8 {
            return None;
        }
        let (a, b, c) = (matrix[0], matrix[1], matrix[3]);
        let (d, e, f) = (matrix[4], matrix[5], matrix[7]);
        if b != 0.0 || d != 0.0 || a == 0.0 || e == 0.0 {
            return None;
        }

        Some(Self {
            origin_x: c,
            origin_y: f,
            pixel_width: a,
            pixel_height: e,
        })
    }

    /// Pixel (row, col) containing the world point, flooring to the cell
    /// the point falls in. Indices may be negative or past the grid edge;
    /// bounds checking is the caller's job.
    pub fn rowcol(&self, lon: f64, lat: f64) -> (i64, i64) {
        let col = ((lon - self.origin_x) / self.pixel_width).floor() as i64;
        let row = ((lat - self.origin_y) / self.pixel_height).floor() as i64;
        (row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global_10deg() -> GeoTransform {
        // 36x18 global grid, 10 degree pixels, north-up
        GeoTransform {
            origin_x: -180.0,
            origin_y: 90.0,
            pixel_width: 10.0,
            pixel_height: -10.0,
        }
    }

    #[test]
    fn test_from_tie_point_and_scale() {
        let transform = GeoTransform::from_tie_point_and_scale(
            &[0.0, 0.0, 0.0, -180.0, 90.0, 0.0],
            &[10.0, 10.0, 0.0],
        )
        .unwrap();

        assert_eq!(transform, global_10deg());
    }

    #[test]
    fn test_from_tie_point_with_offset_anchor() {
        // Tiepoint anchored at pixel (2, 3) instead of the origin
        let transform = GeoTransform::from_tie_point_and_scale(
            &[2.0, 3.0, 0.0, -160.0, 60.0, 0.0],
            &[10.0, 10.0, 0.0],
        )
        .unwrap();

        assert_eq!(transform, global_10deg());
    }

    #[test]
    fn test_from_tie_point_rejects_degenerate_scale() {
        assert!(GeoTransform::from_tie_point_and_scale(
            &[0.0, 0.0, 0.0, -180.0, 90.0, 0.0],
            &[0.0, 10.0, 0.0],
        )
        .is_none());
        assert!(GeoTransform::from_tie_point_and_scale(&[0.0, 0.0], &[10.0, 10.0]).is_none());
    }

    #[test]
    fn test_from_transformation_matrix() {
        #[rustfmt::skip]
        let matrix = [
            10.0, 0.0, 0.0, -180.0,
            0.0, -10.0, 0.0, 90.0,
            0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        let transform = GeoTransform::from_transformation_matrix(&matrix).unwrap();

        assert_eq!(transform, global_10deg());
    }

    #[test]
    fn test_from_transformation_matrix_rejects_rotation() {
        #[rustfmt::skip]
        let skewed = [
            10.0, 0.5, 0.0, -180.0,
            0.0, -10.0, 0.0, 90.0,
            0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ];
        assert!(GeoTransform::from_transformation_matrix(&skewed).is_none());
    }

    #[test]
    fn test_rowcol_floors_to_containing_cell() {
        let transform = global_10deg();

        // Top-left corner lands in pixel (0, 0)
        assert_eq!(transform.rowcol(-180.0, 90.0), (0, 0));
        // Interior of the first cell still pixel (0, 0)
        assert_eq!(transform.rowcol(-175.1, 81.0), (0, 0));
        // Equatorial Atlantic
        assert_eq!(transform.rowcol(0.0, 0.0), (9, 18));
        // Just north of the equator stays in the row above
        assert_eq!(transform.rowcol(0.0, 0.5), (8, 18));
    }

    #[test]
    fn test_rowcol_outside_grid_goes_negative_or_past_edge() {
        let transform = global_10deg();

        let (row, _) = transform.rowcol(0.0, 95.0);
        assert!(row < 0);
        let (row, col) = transform.rowcol(185.0, -95.0);
        assert_eq!(col, 36);
        assert_eq!(row, 18);
    }
}
