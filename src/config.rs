use std::path::{Path, PathBuf};

/// Where the run reads from and writes to.
///
/// The binary always runs with [`RunConfig::default`]; tests point the
/// paths at scratch directories.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Delimited input file with a header row.
    pub data_path: PathBuf,
    /// Directory receiving the summary and the preview, created on demand.
    pub output_dir: PathBuf,
    pub summary_file_name: String,
    pub preview_file_name: String,
    /// Preview raster size in pixels.
    pub preview_width: u32,
    pub preview_height: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/points.csv"),
            output_dir: PathBuf::from("output"),
            summary_file_name: "summary.json".to_string(),
            preview_file_name: "preview.png".to_string(),
            preview_width: 960,
            preview_height: 720,
        }
    }
}

impl RunConfig {
    /// Same file names and sizes as the default, rooted at `base`.
    pub fn rooted_at(base: &Path) -> Self {
        let default = Self::default();
        Self {
            data_path: base.join(&default.data_path),
            output_dir: base.join(&default.output_dir),
            ..default
        }
    }

    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(&self.summary_file_name)
    }

    pub fn preview_path(&self) -> PathBuf {
        self.output_dir.join(&self.preview_file_name)
    }
}
