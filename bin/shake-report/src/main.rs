//! Shake Report CLI
//!
//! Runs the shake defragmenter in pretend mode (or reads its saved output)
//! and turns the report into JSON and terminal summaries.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use shake_report::commands::{
    display_schema, display_version, execute_parse, execute_scan, validate_args,
    validate_parse_args, validate_report_file, ParseArgs, ScanArgs,
};

/// Shake Report - structured fragmentation reports from shake
#[derive(Parser, Debug)]
#[command(name = "shake-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run shake against a target and parse its report
    Scan {
        /// File or directory to scan
        #[arg(short, long)]
        target: Option<String>,

        /// shake binary to run
        #[arg(short, long, env = "SHAKE_PROGRAM")]
        program: Option<String>,

        /// Option string passed to shake (default: -pvvv)
        #[arg(long, allow_hyphen_values = true)]
        options: Option<String>,

        /// TOML config with program, options and target
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Skip writing the JSON report
        #[arg(long)]
        no_output: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Number of files listed in the summary
        #[arg(long, default_value = "20")]
        max_files: usize,
    },

    /// Parse saved shake output (stdin if no input file)
    Parse {
        /// Saved shake output
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Scan target the output was produced for
        #[arg(short, long)]
        target: String,

        /// Output path for the JSON report (stdout if omitted and no summary)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Number of files listed in the summary
        #[arg(long, default_value = "20")]
        max_files: usize,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();
    log::debug!("Log level: {}", log_level);

    match cli.command {
        Commands::Scan {
            target,
            program,
            options,
            config,
            output,
            no_output,
            summary,
            max_files,
        } => {
            let args = ScanArgs {
                target,
                program,
                options,
                config,
                output_json: (!no_output).then_some(output),
                print_summary: summary,
                max_files,
            };

            validate_args(&args)?;
            execute_scan(args)?;
        }

        Commands::Parse {
            input,
            target,
            output,
            summary,
            max_files,
        } => {
            let args = ParseArgs {
                input,
                target,
                output_json: output,
                print_summary: summary,
                max_files,
            };

            validate_parse_args(&args)?;
            execute_parse(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
