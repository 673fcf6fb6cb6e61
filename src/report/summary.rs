use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::data::inspect::{MissingCounts, TableProfile};
use crate::data::validate::{BoundingBox, CoordinateCheck};
use crate::error::{InspectError, Result};

/// The persisted record of one run. Field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub file: String,
    pub rows: usize,
    pub columns: usize,
    pub column_names: Vec<String>,
    pub missing_values_per_column: MissingCounts,
    pub invalid_longitude_count: usize,
    pub invalid_latitude_count: usize,
    pub valid_coordinate_rows: usize,
    pub bbox: Option<BoundingBox>,
}

impl Summary {
    pub fn new(source: &Path, profile: &TableProfile, check: &CoordinateCheck) -> Self {
        Summary {
            file: source.display().to_string(),
            rows: profile.rows,
            columns: profile.columns,
            column_names: profile.column_names.clone(),
            missing_values_per_column: profile.missing.clone(),
            invalid_longitude_count: check.invalid_lon,
            invalid_latitude_count: check.invalid_lat,
            valid_coordinate_rows: check.valid_rows(),
            bbox: check.bbox,
        }
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }
}

/// Overwrite `path` with the summary JSON.
pub fn write_summary(summary: &Summary, path: &Path) -> Result<()> {
    let text = summary.to_json()?;
    fs::write(path, text).map_err(|source| InspectError::Io { path: path.to_path_buf(), source })?;
    log::info!("summary written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::inspect::profile;
    use crate::data::model::{CellValue, Table};
    use crate::data::validate::check_coordinates;
    use serde_json::{json, Value};

    fn summary_for(table: &Table) -> Summary {
        Summary::new(Path::new("data/points.csv"), &profile(table), &check_coordinates(table).unwrap())
    }

    #[test]
    fn json_fields_and_order() {
        let table = Table::new(
            vec!["lon".into(), "lat".into(), "name".into()],
            vec![
                vec![CellValue::Float(1.5), CellValue::Float(2.0), CellValue::Null],
                vec![CellValue::Float(-3.0), CellValue::Integer(4)],
            ],
        );
        let text = summary_for(&table).to_json().unwrap();

        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            json!({
                "file": "data/points.csv",
                "rows": 2,
                "columns": 3,
                "column_names": ["lon", "lat", "name"],
                "missing_values_per_column": {"lon": 0, "lat": 0, "name": 2},
                "invalid_longitude_count": 0,
                "invalid_latitude_count": 0,
                "valid_coordinate_rows": 2,
                "bbox": {"min_lon": -3.0, "min_lat": 2.0, "max_lon": 1.5, "max_lat": 4.0}
            })
        );

        let keys = ["\"file\"", "\"rows\"", "\"columns\"", "\"column_names\"", "\"bbox\""];
        let positions: Vec<usize> = keys.iter().map(|k| text.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{text}");
        assert!(text.starts_with("{\n  \"file\""));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn bbox_is_null_without_valid_rows() {
        let table = Table::new(vec!["lon".into(), "lat".into()], Vec::new());
        let value: Value = serde_json::from_str(&summary_for(&table).to_json().unwrap()).unwrap();
        assert_eq!(value["rows"], 0);
        assert!(value["bbox"].is_null());
    }

    #[test]
    fn bbox_bounds_serialize_as_floats() {
        let table = Table::new(
            vec!["lon".into(), "lat".into()],
            vec![vec![CellValue::Integer(10), CellValue::Integer(20)]],
        );
        let text = summary_for(&table).to_json().unwrap();
        assert!(text.contains("\"min_lon\": 10.0"), "{text}");
        assert!(text.contains("\"max_lat\": 20.0"), "{text}");
    }
}
