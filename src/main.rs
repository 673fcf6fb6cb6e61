use std::process::ExitCode;

use anyhow::Context;
use point_inspect::report::console::print_report;
use point_inspect::{InspectError, RunConfig, run};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RunConfig::default();
    match run(&config) {
        Ok(report) => {
            if let Err(e) = print_report(
                &report.summary,
                &report.artifacts.summary_path,
                &report.artifacts.preview_path,
            )
            .context("writing console report")
            {
                log::error!("{e:#}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let code = exit_code_for(&e);
            let err = anyhow::Error::new(e).context(format!("inspecting {}", config.data_path.display()));
            log::error!("{err:#}");
            code
        }
    }
}

/// 2 for problems with the input file, 1 for failures writing outputs.
fn exit_code_for(e: &InspectError) -> ExitCode {
    if e.is_fatal_input() {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}
