use std::fs::File;
use std::io;
use std::path::Path;

use crate::error::{InspectError, Result};

use super::model::{CellValue, Table};

/// Cell texts read as missing values, on top of empty/blank cells.
/// Same set pandas treats as NA by default.
const NA_MARKERS: &[&str] = &[
    "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "-nan", "null", "NULL", "None", "#N/A", "#N/A N/A",
    "#NA", "<NA>", "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a delimited file with a header row into a [`Table`].
///
/// The delimiter follows the extension: `.tsv` / `.tab` are tab-separated,
/// everything else is read as comma-separated. No schema is checked here.
pub fn load_table(path: &Path) -> Result<Table> {
    if !path.is_file() {
        return Err(InspectError::SourceNotFound { path: path.to_path_buf() });
    }
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InspectError::SourceNotFound { path: path.to_path_buf() },
        _ => InspectError::Io { path: path.to_path_buf(), source },
    })?;

    let table = read_delimited(file, delimiter_for(path), path)?;
    log::info!(
        "loaded {} ({} rows × {} columns)",
        path.display(),
        table.len(),
        table.width()
    );
    Ok(table)
}

fn delimiter_for(path: &Path) -> u8 {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "tsv" | "tab" => b'\t',
        _ => b',',
    }
}

// ---------------------------------------------------------------------------
// Delimited reader
// ---------------------------------------------------------------------------

/// Parse header + records from any reader. `path` is only used for
/// diagnostics.
pub fn read_delimited<R: io::Read>(source: R, delimiter: u8, path: &Path) -> Result<Table> {
    let csv_err = |source| InspectError::Csv { path: path.to_path_buf(), source };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(source);

    let raw_headers: Vec<String> = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();
    let column_names = dedup_headers(raw_headers);
    let width = column_names.len();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_err)?;
        if record.len() > width {
            return Err(InspectError::RaggedRow {
                path: path.to_path_buf(),
                line: record.position().map_or(0, |p| p.line()),
                expected: width,
                found: record.len(),
            });
        }
        rows.push(record.iter().map(guess_cell_type).collect());
    }

    Ok(Table::new(column_names, rows))
}

/// Make header names unique in source order: the second `a` becomes `a.1`,
/// the third `a.2`, skipping any suffix already taken.
fn dedup_headers(headers: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(headers.len());
    for name in headers {
        if !out.contains(&name) {
            out.push(name);
            continue;
        }
        let mut n = 1;
        let unique = loop {
            let candidate = format!("{name}.{n}");
            if !out.contains(&candidate) {
                break candidate;
            }
            n += 1;
        };
        log::debug!("duplicate column '{name}' renamed to '{unique}'");
        out.push(unique);
    }
    out
}

fn guess_cell_type(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() || NA_MARKERS.contains(&s) {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        if f.is_nan() {
            return CellValue::Null;
        }
        return CellValue::Float(f);
    }
    match s {
        "true" | "True" | "TRUE" => return CellValue::Bool(true),
        "false" | "False" | "FALSE" => return CellValue::Bool(false),
        _ => {}
    }
    CellValue::String(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(text: &str) -> Result<Table> {
        read_delimited(text.as_bytes(), b',', Path::new("inline.csv"))
    }

    #[test]
    fn reads_header_and_typed_cells() {
        let table = parse("id,lon,lat,name\n1,10.5,-20,alpha\n2,,NaN,beta\n").unwrap();
        assert_eq!(table.column_names(), ["id", "lon", "lat", "name"]);
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.rows()[0],
            vec![
                CellValue::Integer(1),
                CellValue::Float(10.5),
                CellValue::Integer(-20),
                CellValue::String("alpha".into()),
            ]
        );
        assert_eq!(table.rows()[1][1], CellValue::Null);
        assert_eq!(table.rows()[1][2], CellValue::Null);
    }

    #[test]
    fn header_only_file_gives_empty_table() {
        let table = parse("lon,lat\n").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.width(), 2);
    }

    #[test]
    fn short_rows_padded_long_rows_rejected() {
        let table = parse("lon,lat,name\n1,2\n").unwrap();
        assert_eq!(table.rows()[0][2], CellValue::Null);

        let err = parse("lon,lat\n1,2,3\n").unwrap_err();
        match err {
            InspectError::RaggedRow { line, expected, found, .. } => {
                assert_eq!((line, expected, found), (2, 2, 3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn duplicate_headers_are_suffixed() {
        let names = dedup_headers(vec!["a".into(), "a".into(), "a.1".into(), "a".into()]);
        assert_eq!(names, ["a", "a.1", "a.1.1", "a.2"]);
    }

    #[test]
    fn cell_typing() {
        assert_eq!(guess_cell_type("  "), CellValue::Null);
        assert_eq!(guess_cell_type("N/A"), CellValue::Null);
        assert_eq!(guess_cell_type("NAN"), CellValue::Null);
        for marker in ["#NA", "#N/A N/A", "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN"] {
            assert_eq!(guess_cell_type(marker), CellValue::Null, "{marker}");
        }
        assert_eq!(guess_cell_type(" 42 "), CellValue::Integer(42));
        assert_eq!(guess_cell_type("1e3"), CellValue::Float(1000.0));
        assert_eq!(guess_cell_type("inf"), CellValue::Float(f64::INFINITY));
        assert_eq!(guess_cell_type("True"), CellValue::Bool(true));
        assert_eq!(guess_cell_type("abc"), CellValue::String("abc".into()));
    }

    #[test]
    fn tab_extension_selects_tab_delimiter() {
        assert_eq!(delimiter_for(Path::new("points.TSV")), b'\t');
        assert_eq!(delimiter_for(Path::new("points.csv")), b',');
        assert_eq!(delimiter_for(Path::new("points")), b',');
    }

    #[test]
    fn loads_tab_separated_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("points.tsv");
        std::fs::write(&path, "lon\tlat\n1.5\t2.5\n").unwrap();
        let table = load_table(&path).unwrap();
        assert_eq!(table.column_names(), ["lon", "lat"]);
        assert_eq!(table.rows()[0], vec![CellValue::Float(1.5), CellValue::Float(2.5)]);
    }

    #[test]
    fn missing_file_is_source_not_found() {
        let path = PathBuf::from("definitely/not/here.csv");
        match load_table(&path).unwrap_err() {
            InspectError::SourceNotFound { path: p } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn directory_is_source_not_found() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_table(dir.path()).unwrap_err(),
            InspectError::SourceNotFound { .. }
        ));
    }
}
