//! Terminal rendering of parsed reports.

use crate::parser::{ErrorReason, FileRecord, Fragment, Report};
use colored::*;

/// Fragments listed inline before eliding the rest
const MAX_INLINE_FRAGMENTS: usize = 8;

/// Render a human-readable summary of a report for the terminal
///
/// Files come first, most fragmented at the top; diagnostics follow and
/// never hide the files that did parse.
pub fn render_report_summary(report: &Report, max_files: usize) -> String {
    let mut out = String::new();

    out.push_str(&render_header(report));
    out.push_str(&render_files(report, max_files));
    out.push_str(&render_errors(report));

    out
}

fn render_header(report: &Report) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(&"Fragmentation Report".bold().to_string());
    out.push_str("\n---------------------------------------------------\n");
    out.push_str(&format!("Files:       {}\n", report.files.len()));
    out.push_str(&format!("Fragments:   {}\n", report.total_fragments()));
    out.push_str(&format!(
        "Fragmented:  {}\n",
        report.fragmented_files().count()
    ));
    out.push_str(&format!("Guilty:      {}\n", report.guilty_files().count()));
    out.push_str(&format!("Diagnostics: {}\n", report.errors.len()));
    out.push_str("---------------------------------------------------\n\n");
    out
}

fn render_files(report: &Report, max_files: usize) -> String {
    let mut out = String::new();
    if report.files.is_empty() {
        return out;
    }

    let mut files: Vec<&FileRecord> = report.files.iter().collect();
    // Stable, so ties keep input order
    files.sort_by(|a, b| b.fragment_count.cmp(&a.fragment_count));

    out.push_str(&format!(
        "  {:>6} {:>6} {:>6}  {}\n",
        "FRAGS", "CRUMBS", "AGE", "NAME"
    ));
    for file in files.iter().take(max_files) {
        out.push_str(&render_file(file, report.has_fragment_detail));
    }

    if files.len() > max_files {
        out.push_str(&format!(
            "  (Showing {} of {} files)\n",
            max_files,
            files.len()
        ));
    }
    out.push('\n');
    out
}

fn render_file(file: &FileRecord, show_fragments: bool) -> String {
    let marker = if file.is_guilty() {
        "!".red().bold()
    } else {
        " ".normal()
    };
    let name = if file.is_fragmented() {
        file.name.yellow()
    } else {
        file.name.normal()
    };

    let mut line = format!(
        "{} {:>6} {:>6} {:>6}  {}\n",
        marker, file.fragment_count, file.crumb_count, file.age, name
    );
    if show_fragments && !file.fragments.is_empty() {
        line.push_str(&format!(
            "  {:>20}  {}\n",
            "",
            format_fragments(&file.fragments).dimmed()
        ));
    }
    line
}

/// `offset+length` pairs, elided past a handful
fn format_fragments(fragments: &[Fragment]) -> String {
    let mut parts: Vec<String> = fragments
        .iter()
        .take(MAX_INLINE_FRAGMENTS)
        .map(|f| format!("{}+{}", f.offset, f.length))
        .collect();
    if fragments.len() > MAX_INLINE_FRAGMENTS {
        parts.push(format!("... {} more", fragments.len() - MAX_INLINE_FRAGMENTS));
    }
    parts.join(" ")
}

fn render_errors(report: &Report) -> String {
    let mut out = String::new();
    if report.errors.is_empty() {
        return out;
    }

    out.push_str(&"Diagnostics:\n".bold().to_string());
    for error in &report.errors {
        let reason = match error.reason {
            ErrorReason::ToolReportedError => error.reason.to_string().red(),
            _ => error.reason.to_string().yellow(),
        };
        out.push_str(&format!(
            "  line {:>5} [{}] {}\n",
            error.line_number, reason, error.raw_line
        ));
        if error.reason != ErrorReason::ToolReportedError {
            out.push_str(&format!("             {}\n", error.detail.dimmed()));
        }
    }
    out
}
