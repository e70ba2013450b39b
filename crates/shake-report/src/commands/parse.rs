//! Parse command implementation.
//!
//! Parses shake output saved earlier (or piped on stdin) without running
//! the tool.

use crate::commands::models::ParseArgs;
use crate::output::{render_report_summary, report_to_string, write_report, ReportDocument};
use crate::parser::{parse_report, Report};
use anyhow::{Context, Result};
use log::{info, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Execute the parse command
///
/// When neither an output file nor a summary is requested the JSON
/// document goes to stdout.
///
/// # Errors
/// * Input file cannot be opened
/// * Input broke mid-stream (the partial report is still emitted)
/// * File write errors
pub fn execute_parse(args: ParseArgs) -> Result<()> {
    let reader = open_input(&args)?;

    match parse_report(reader, &args.target) {
        Ok(report) => emit_report(report, &args),
        Err(err) => {
            warn!("{}", err);
            let partial = err.into_partial_report();
            let kept = partial.files.len();
            emit_report(partial, &args)?;
            anyhow::bail!("Report input ended early ({} files kept)", kept);
        }
    }
}

/// Open the input named by the args, or stdin
///
/// **Public** - exposed for tests
pub fn open_input(args: &ParseArgs) -> Result<Box<dyn BufRead>> {
    match &args.input {
        Some(path) => {
            info!("Parsing report from: {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            info!("Parsing report from stdin");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}

/// Write the JSON report and print the summary, as requested
///
/// **Private** - shared by the success and partial-report paths
fn emit_report(report: Report, args: &ParseArgs) -> Result<()> {
    let document = ReportDocument::new(report, args.target.clone());

    if let Some(path) = &args.output_json {
        write_report(&document, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if args.print_summary {
        println!(
            "{}",
            render_report_summary(&document.report, args.max_files)
        );
    }

    if args.output_json.is_none() && !args.print_summary {
        println!("{}", report_to_string(&document)?);
    }

    Ok(())
}

/// Validate parse arguments
pub fn validate_parse_args(args: &ParseArgs) -> Result<()> {
    if args.target.is_empty() {
        anyhow::bail!("Scan target cannot be empty");
    }

    if args.max_files == 0 {
        anyhow::bail!("max_files must be greater than 0");
    }

    Ok(())
}
