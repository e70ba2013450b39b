//! Scan command implementation.
//!
//! The scan command:
//! 1. Resolves the tool invocation from config and flags
//! 2. Runs shake and parses its report as it streams
//! 3. Writes the JSON report and/or prints a summary

use crate::commands::models::ScanArgs;
use crate::output::{render_report_summary, write_report, ReportDocument};
use crate::parser::Report;
use crate::runner::{load_config, run_and_parse, ShakeCommand, ShakeConfig};
use crate::utils::error::RunnerError;
use anyhow::{Context, Result};
use log::{info, warn};
use std::path::Path;
use std::time::Instant;

/// Execute the scan command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Config file unreadable
/// * Tool failed to start
/// * Tool stdout broke mid-stream (the partial report is still written)
/// * File write errors
pub fn execute_scan(args: ScanArgs) -> Result<()> {
    let start_time = Instant::now();

    let command = resolve_command(&args)?;
    info!("Scanning: {}", command.target);

    let report = match run_and_parse(&command) {
        Ok(outcome) => {
            if !outcome.tool_succeeded() {
                warn!("shake reported failure ({}), keeping parsed output", outcome.status);
            }
            outcome.report
        }
        Err(RunnerError::Report(err)) => {
            warn!("{}", err);
            let partial = err.into_partial_report();
            emit_report(&partial, &command.target, &args)?;
            anyhow::bail!(
                "Report stream from {} ended early ({} files kept)",
                command.program,
                partial.files.len()
            );
        }
        Err(err) => {
            return Err(err).context(format!("Failed to run {}", command.program));
        }
    };

    emit_report(&report, &command.target, &args)?;

    info!(
        "Scan completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}

/// Merge config file and flags into a tool invocation
///
/// **Public** - exposed for tests
pub fn resolve_command(args: &ScanArgs) -> Result<ShakeCommand> {
    let config = match &args.config {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ShakeConfig::default(),
    };

    let config = config.merge(
        args.program.clone(),
        args.options.clone(),
        args.target.clone(),
    );

    let command = config
        .to_command()
        .context("No scan target given (use --target or set `target` in the config)")?;

    if command.target.is_empty() {
        anyhow::bail!("Scan target cannot be empty");
    }
    if command.program.is_empty() {
        anyhow::bail!("Program cannot be empty");
    }

    Ok(command)
}

/// Write the JSON report and print the summary, as requested
///
/// **Private** - shared by the success and partial-report paths
fn emit_report(report: &Report, target: &str, args: &ScanArgs) -> Result<()> {
    if let Some(path) = &args.output_json {
        write_json(report, target, path)?;
    }

    if args.print_summary {
        println!("{}", render_report_summary(report, args.max_files));
    }

    Ok(())
}

fn write_json(report: &Report, target: &str, path: &Path) -> Result<()> {
    let document = ReportDocument::new(report.clone(), target);
    write_report(&document, path).context("Failed to write report JSON")?;
    info!("✓ Report written to: {}", path.display());
    Ok(())
}

/// Validate scan arguments
///
/// **Public** - can be called before execute_scan for early validation
pub fn validate_args(args: &ScanArgs) -> Result<()> {
    if args.target.is_none() && args.config.is_none() {
        anyhow::bail!("A scan target is required (--target or a config file)");
    }

    if matches!(args.target.as_deref(), Some("")) {
        anyhow::bail!("Scan target cannot be empty");
    }

    if matches!(args.program.as_deref(), Some("")) {
        anyhow::bail!("Program cannot be empty");
    }

    if args.max_files == 0 {
        anyhow::bail!("max_files must be greater than 0");
    }

    Ok(())
}
