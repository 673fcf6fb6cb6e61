//! Write a deterministic `data/points.csv` with a known share of bad rows.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Cluster centres the good points scatter around: (name, lon, lat).
const SITES: [(&str, f64, f64); 4] = [
    ("harbor", -122.42, 37.77),
    ("delta", 90.35, 23.68),
    ("plateau", 36.82, -1.29),
    ("fjord", 10.75, 59.91),
];

const ROWS: usize = 240;
const SEED: u64 = 42;

fn coordinate_cells<R: Rng>(rng: &mut R, lon: f64, lat: f64) -> (String, String) {
    let roll = rng.random::<f64>();
    let fmt = |v: f64| format!("{v:.5}");
    if roll < 0.04 {
        (String::new(), fmt(lat))
    } else if roll < 0.06 {
        (fmt(lon), String::new())
    } else if roll < 0.09 {
        (fmt(lon + 360.0), fmt(lat))
    } else if roll < 0.12 {
        (fmt(lon), fmt(lat.signum() * 95.0))
    } else if roll < 0.14 {
        ("unknown".to_string(), fmt(lat))
    } else {
        (fmt(lon), fmt(lat))
    }
}

/// Write the header plus `rows` records, returning the record count.
fn write_points<W: io::Write, R: Rng>(sink: W, rng: &mut R, rows: usize) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(["id", "name", "lon", "lat"])?;

    for id in 0..rows {
        let (site, c_lon, c_lat) = SITES[id % SITES.len()];
        let lon = c_lon + rng.random_range(-2.0..2.0);
        let lat = c_lat + rng.random_range(-1.5..1.5);
        let (lon_cell, lat_cell) = coordinate_cells(rng, lon, lat);
        let name = if rng.random::<f64>() < 0.05 { String::new() } else { format!("{site}-{id}") };
        writer.write_record([id.to_string(), name, lon_cell, lat_cell])?;
    }
    writer.flush().context("flushing CSV")?;
    Ok(rows)
}

fn main() -> Result<()> {
    let output_path = Path::new("data/points.csv");
    if let Some(dir) = output_path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let file = std::fs::File::create(output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    let mut rng = StdRng::seed_from_u64(SEED);
    let written = write_points(file, &mut rng, ROWS)?;

    println!("Wrote {written} points to {}", output_path.display());
    Ok(())
}
