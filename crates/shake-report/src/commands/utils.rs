use crate::output::read_report;
use crate::parser::ErrorReason;
use crate::utils::config::{REPORT_HEADER_COLUMNS, SCHEMA_VERSION};
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let document = read_report(&file_path)?;
    let report = &document.report;

    println!("✓ Valid report JSON");
    println!("  Version: {}", document.version);
    println!("  Target: {}", document.target);
    println!("  Generated: {}", document.generated_at);
    println!("  Fragment Detail: {}", report.has_fragment_detail);
    println!("  Files: {}", report.files.len());
    println!("  Fragments: {}", report.total_fragments());
    println!(
        "  Tool Errors: {}",
        report.errors_by_reason(ErrorReason::ToolReportedError).count()
    );
    println!(
        "  Malformed Lines: {}",
        report.errors.len()
            - report
                .errors_by_reason(ErrorReason::ToolReportedError)
                .count()
    );

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Shake Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!("Input Columns: {}", REPORT_HEADER_COLUMNS.join(" "));
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  target: string             - Scan target given to shake");
        println!("  generated_at: string       - ISO 8601 timestamp");
        println!("  report: object");
        println!("    has_fragment_detail: bool - Input carried the FRAGS column");
        println!("    files: array");
        println!("      ideal: number          - Ideal start position");
        println!("      start_block: number    - First block");
        println!("      end_block: number      - Last block");
        println!("      fragment_count: number - FRAGC");
        println!("      crumb_count: number    - CRUMBC");
        println!("      age: number            - Age in days");
        println!("      guilty: number         - SHOCKED code");
        println!("      name: string           - File path");
        println!("      fragments: array       - {{offset, length}} in disk order");
        println!("    errors: array");
        println!("      line_number: number    - 1-based input line");
        println!("      raw_line: string       - Line text");
        println!("      reason: string         - tool_reported_error | malformed_fragment_list | malformed_record");
        println!("      detail: string         - Cause");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Shake Report v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Structured parsing of shake fragmentation reports.");
}
