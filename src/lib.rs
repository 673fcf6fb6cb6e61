//! Data-quality triage for tabular point files.
//!
//! Reads a delimited file with `lon`/`lat` columns, counts missing cells and
//! out-of-range coordinates, computes the bounding box of the valid points
//! and writes a JSON summary plus a PNG scatter preview.

pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod report;

pub use config::RunConfig;
pub use error::InspectError;
pub use pipeline::{RunReport, run};
