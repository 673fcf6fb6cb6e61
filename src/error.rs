use std::path::PathBuf;

use thiserror::Error;

/// Everything that can end an inspection run early.
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("cannot find file at '{}'; make sure you have: data/points.csv", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("missing required column(s): {}. Required: lon, lat", missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("malformed CSV in '{}'", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("'{}' line {line}: expected {expected} fields, found {found}", path.display())]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("I/O error on '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serializing summary")]
    Json(#[from] serde_json::Error),

    #[error("rendering preview: {0}")]
    Plot(String),

    #[error("encoding preview image '{}'", path.display())]
    Png {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },
}

impl InspectError {
    /// Errors caused by the input file rather than by writing outputs.
    pub fn is_fatal_input(&self) -> bool {
        matches!(
            self,
            InspectError::SourceNotFound { .. }
                | InspectError::Schema { .. }
                | InspectError::Csv { .. }
                | InspectError::RaggedRow { .. }
        )
    }
}

pub type Result<T, E = InspectError> = std::result::Result<T, E>;
