use crate::config::RunConfig;
use crate::data::inspect::profile;
use crate::data::loader::load_table;
use crate::data::validate::check_coordinates;
use crate::error::Result;
use crate::report::summary::Summary;
use crate::report::{Artifacts, write_artifacts};

/// What one successful run computed and wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub summary: Summary,
    pub artifacts: Artifacts,
}

/// Load → inspect → validate → write artifacts.
///
/// Input errors surface before anything is written, so a failed run leaves
/// the output directory untouched.
pub fn run(config: &RunConfig) -> Result<RunReport> {
    let table = load_table(&config.data_path)?;
    let table_profile = profile(&table);
    let check = check_coordinates(&table)?;

    log::info!(
        "{} of {} rows have valid coordinates ({} invalid lon, {} invalid lat)",
        check.valid_rows(),
        table_profile.rows,
        check.invalid_lon,
        check.invalid_lat
    );

    let summary = Summary::new(&config.data_path, &table_profile, &check);
    let artifacts = write_artifacts(config, &summary, &check)?;
    Ok(RunReport { summary, artifacts })
}
