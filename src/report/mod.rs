//! Output layer: JSON summary, scatter preview and console report.
//! The only part of the crate that writes files.

pub mod console;
pub mod preview;
pub mod summary;

use std::fs;
use std::path::PathBuf;

use crate::config::RunConfig;
use crate::data::validate::CoordinateCheck;
use crate::error::{InspectError, Result};

use preview::PreviewPlot;
use summary::{Summary, write_summary};

/// Paths of the artifacts a run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Artifacts {
    pub summary_path: PathBuf,
    pub preview_path: PathBuf,
}

/// Create the output directory, then overwrite the summary and the preview.
/// The preview is written even when there is nothing to plot.
pub fn write_artifacts(config: &RunConfig, summary: &Summary, check: &CoordinateCheck) -> Result<Artifacts> {
    fs::create_dir_all(&config.output_dir)
        .map_err(|source| InspectError::Io { path: config.output_dir.clone(), source })?;

    let summary_path = config.summary_path();
    write_summary(summary, &summary_path)?;

    let preview_path = config.preview_path();
    PreviewPlot::new(
        config.preview_width,
        config.preview_height,
        &check.valid_points,
        check.bbox.as_ref(),
    )
    .save(&preview_path)?;

    Ok(Artifacts { summary_path, preview_path })
}
