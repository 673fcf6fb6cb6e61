use std::io::{self, Write};
use std::path::Path;

use super::summary::Summary;

/// Write the human-readable report: basic info, missing values, invalid
/// coordinates, bounding box, then where the artifacts went.
pub fn write_report<W: Write>(
    out: &mut W,
    summary: &Summary,
    summary_path: &Path,
    preview_path: &Path,
) -> io::Result<()> {
    writeln!(out, "=== DATA INSPECTION REPORT ===")?;

    writeln!(out)?;
    writeln!(out, "Basic Information")?;
    writeln!(out, "-----------------")?;
    writeln!(out, "File: {}", summary.file)?;
    writeln!(out, "Number of rows: {}", summary.rows)?;
    writeln!(out, "Number of columns: {}", summary.columns)?;
    writeln!(out, "Column names: [{}]", summary.column_names.join(", "))?;

    writeln!(out)?;
    writeln!(out, "Data Quality Checks")?;
    writeln!(out, "-------------------")?;
    writeln!(out, "Missing values per column:")?;
    let name_width = summary
        .missing_values_per_column
        .iter()
        .map(|(c, _)| c.chars().count())
        .max()
        .unwrap_or(0);
    for (column, count) in summary.missing_values_per_column.iter() {
        writeln!(out, "  {column:<name_width$}  {count:>6}")?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Invalid longitude values (missing or outside -180..180): {}",
        summary.invalid_longitude_count
    )?;
    writeln!(
        out,
        "Invalid latitude values (missing or outside -90..90): {}",
        summary.invalid_latitude_count
    )?;
    writeln!(out, "Valid coordinate rows: {}", summary.valid_coordinate_rows)?;

    writeln!(out)?;
    writeln!(out, "Bounding Box")?;
    writeln!(out, "------------")?;
    match &summary.bbox {
        Some(b) => {
            writeln!(out, "Min Longitude: {:?}", b.min_lon)?;
            writeln!(out, "Min Latitude : {:?}", b.min_lat)?;
            writeln!(out, "Max Longitude: {:?}", b.max_lon)?;
            writeln!(out, "Max Latitude : {:?}", b.max_lat)?;
        }
        None => {
            writeln!(out, "No valid coordinate rows found. Bounding box cannot be computed.")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Saved summary to: {}", summary_path.display())?;
    writeln!(out, "Saved scatter plot to: {}", preview_path.display())?;
    writeln!(out)?;
    writeln!(out, "=== END OF REPORT ===")?;
    Ok(())
}

/// [`write_report`] to standard output.
pub fn print_report(summary: &Summary, summary_path: &Path, preview_path: &Path) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_report(&mut lock, summary, summary_path, preview_path)?;
    lock.flush()
}
