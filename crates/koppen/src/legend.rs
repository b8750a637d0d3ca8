//! The Köppen-Geiger class legend.
//!
//! Codes follow the published global map legend: 1 through 30, plus 31 as a
//! summer-dry variant of the tropical savanna class. The mapping is sparse,
//! so it lives in a map rather than an array-indexed enum. Rasters may
//! contain values outside the legend (the nodata sentinel included); those
//! resolve to [`UNKNOWN_LABEL`].

use std::collections::BTreeMap;

/// Integer class code as stored in the raster.
pub type ClassCode = i64;

/// Label returned for codes not present in the legend.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Immutable mapping from class code to display label.
///
/// Built once at startup and read-only thereafter.
#[derive(Debug, Clone)]
pub struct KoppenLegend {
    entries: BTreeMap<ClassCode, &'static str>,
}

impl KoppenLegend {
    /// Build the full documented legend.
    pub fn new() -> Self {
        let entries = BTreeMap::from([
            (1, "Af - Tropical rainforest"),
            (2, "Am - Tropical monsoon"),
            (3, "Aw - Tropical savanna"),
            (31, "As - Tropical savanna (summer dry)"),
            (4, "BWh - Hot desert"),
            (5, "BWk - Cold desert"),
            (6, "BSh - Hot semi-arid"),
            (7, "BSk - Cold semi-arid"),
            (8, "Csa - Hot-summer Mediterranean"),
            (9, "Csb - Warm-summer Mediterranean"),
            (10, "Csc - Cold-summer Mediterranean"),
            (11, "Cwa - Humid subtropical (dry winter)"),
            (12, "Cwb - Subtropical highland"),
            (13, "Cwc - Cold subtropical highland"),
            (14, "Cfa - Humid subtropical"),
            (15, "Cfb - Oceanic"),
            (16, "Cfc - Subpolar oceanic"),
            (17, "Dsa - Hot-summer continental (dry summer)"),
            (18, "Dsb - Warm-summer continental (dry summer)"),
            (19, "Dsc - Subarctic (dry summer)"),
            (20, "Dsd - Very cold dry-summer continental"),
            (21, "Dwa - Hot-summer continental (dry winter)"),
            (22, "Dwb - Warm-summer continental (dry winter)"),
            (23, "Dwc - Subarctic (dry winter)"),
            (24, "Dwd - Very cold dry-winter subarctic"),
            (25, "Dfa - Hot-summer continental"),
            (26, "Dfb - Warm-summer continental"),
            (27, "Dfc - Subarctic"),
            (28, "Dfd - Extremely cold subarctic"),
            (29, "ET - Tundra"),
            (30, "EF - Ice cap"),
        ]);
        Self { entries }
    }

    /// Display label for a code, or [`UNKNOWN_LABEL`] when the code is not
    /// documented. Total over all integers.
    pub fn describe(&self, code: ClassCode) -> &'static str {
        self.entries.get(&code).copied().unwrap_or(UNKNOWN_LABEL)
    }

    /// Every documented code and its label, ordered by code.
    pub fn entries(&self) -> &BTreeMap<ClassCode, &'static str> {
        &self.entries
    }

    /// Number of documented classes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The legend is never empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KoppenLegend {
    fn default() -> Self {
        Self::new()
    }
}
