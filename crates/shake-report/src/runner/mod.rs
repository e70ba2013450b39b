//! Running shake and streaming its report into the parser.

pub mod command;
pub mod config;

pub use command::{ShakeCommand, ShakeProcess};
pub use config::{load_config, ShakeConfig};

use crate::parser::{parse_report, Report};
use crate::utils::error::RunnerError;
use log::{info, warn};
use std::process::ExitStatus;

/// Parsed report plus how the tool exited
#[derive(Debug)]
pub struct RunOutcome {
    pub report: Report,
    pub status: ExitStatus,
}

impl RunOutcome {
    pub fn tool_succeeded(&self) -> bool {
        self.status.success()
    }
}

/// Run the tool and parse its stdout as it arrives
///
/// **Public** - main entry point for live scans
///
/// A non-zero exit status is logged and returned, never turned into an error:
/// the report parsed so far is still useful.
///
/// # Errors
/// * `RunnerError::SpawnFailed` - tool could not start
/// * `RunnerError::Report` - stdout broke mid-stream (partial report inside)
/// * `RunnerError::WaitFailed` - exit status could not be collected
pub fn run_and_parse(command: &ShakeCommand) -> Result<RunOutcome, RunnerError> {
    let mut process = command.spawn()?;
    let stdout = process.take_stdout().ok_or(RunnerError::MissingStdout)?;

    let parsed = parse_report(stdout, &command.target);
    let status = process.wait();

    let report = parsed?;
    let status = status?;

    if status.success() {
        info!(
            "{} finished: {} files, {} errors",
            command.program,
            report.files.len(),
            report.errors.len()
        );
    } else {
        warn!("{} exited with {}", command.program, status);
    }

    Ok(RunOutcome { report, status })
}
