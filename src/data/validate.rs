use std::ops::RangeInclusive;

use serde::Serialize;

use crate::error::{InspectError, Result};

use super::model::{CellValue, Table};

pub const LON_COLUMN: &str = "lon";
pub const LAT_COLUMN: &str = "lat";

pub const LON_RANGE: RangeInclusive<f64> = -180.0..=180.0;
pub const LAT_RANGE: RangeInclusive<f64> = -90.0..=90.0;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Axis-aligned extent of the valid points, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// Min/max reduction over points. `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        points.into_iter().fold(None, |acc, (lon, lat)| {
            Some(match acc {
                None => BoundingBox { min_lon: lon, min_lat: lat, max_lon: lon, max_lat: lat },
                Some(b) => BoundingBox {
                    min_lon: b.min_lon.min(lon),
                    min_lat: b.min_lat.min(lat),
                    max_lon: b.max_lon.max(lon),
                    max_lat: b.max_lat.max(lat),
                },
            })
        })
    }
}

/// Outcome of the coordinate checks over one table.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateCheck {
    /// Rows whose `lon` is missing, non-numeric or outside [-180, 180].
    pub invalid_lon: usize,
    /// Rows whose `lat` is missing, non-numeric or outside [-90, 90].
    pub invalid_lat: usize,
    /// Indices of rows passing both checks, in source order.
    pub valid_indices: Vec<usize>,
    /// `(lon, lat)` of the rows in `valid_indices`.
    pub valid_points: Vec<(f64, f64)>,
    /// `None` when no row is valid.
    pub bbox: Option<BoundingBox>,
}

impl CoordinateCheck {
    pub fn valid_rows(&self) -> usize {
        self.valid_indices.len()
    }
}

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// Fail with [`InspectError::Schema`] unless both `lon` and `lat` exist.
/// All missing columns are reported, sorted by name.
pub fn require_coordinate_columns(table: &Table) -> Result<(usize, usize)> {
    match (table.column_index(LON_COLUMN), table.column_index(LAT_COLUMN)) {
        (Some(lon), Some(lat)) => Ok((lon, lat)),
        (lon, lat) => {
            let mut missing = Vec::new();
            if lat.is_none() {
                missing.push(LAT_COLUMN.to_string());
            }
            if lon.is_none() {
                missing.push(LON_COLUMN.to_string());
            }
            Err(InspectError::Schema { missing })
        }
    }
}

/// A coordinate counts only when it is numeric and inside `range`.
/// Missing and non-numeric cells are treated alike.
fn coordinate_in(cell: &CellValue, range: &RangeInclusive<f64>) -> Option<f64> {
    cell.as_f64().filter(|v| range.contains(v))
}

/// Classify each row's coordinates and reduce the valid ones to a bbox.
pub fn check_coordinates(table: &Table) -> Result<CoordinateCheck> {
    let (lon_idx, lat_idx) = require_coordinate_columns(table)?;

    let mut invalid_lon = 0;
    let mut invalid_lat = 0;
    let mut valid_indices = Vec::new();
    let mut valid_points = Vec::new();

    for (i, row) in table.rows().iter().enumerate() {
        let lon = coordinate_in(&row[lon_idx], &LON_RANGE);
        let lat = coordinate_in(&row[lat_idx], &LAT_RANGE);
        if lon.is_none() {
            invalid_lon += 1;
        }
        if lat.is_none() {
            invalid_lat += 1;
        }
        if let (Some(lon), Some(lat)) = (lon, lat) {
            valid_indices.push(i);
            valid_points.push((lon, lat));
        }
    }

    let bbox = BoundingBox::from_points(valid_points.iter().copied());

    log::debug!(
        "coordinate check: {invalid_lon} invalid lon, {invalid_lat} invalid lat, {} valid of {}",
        valid_indices.len(),
        table.len()
    );
    if bbox.is_none() {
        log::warn!("no valid coordinate rows; bounding box cannot be computed");
    }

    Ok(CoordinateCheck { invalid_lon, invalid_lat, valid_indices, valid_points, bbox })
}
