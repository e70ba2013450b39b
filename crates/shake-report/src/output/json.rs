//! JSON report output writer.
//!
//! Writes parsed reports to JSON files, wrapped with a schema version and
//! the scan target they came from.

use crate::parser::Report;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Top-level structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Schema version for compatibility checking
    pub version: String,

    /// Scan target the report was produced for
    pub target: String,

    /// Timestamp when the document was generated (RFC 3339)
    pub generated_at: String,

    pub report: Report,
}

impl ReportDocument {
    /// Wrap a report, stamping the current time
    pub fn new(report: Report, target: impl Into<String>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            target: target.into(),
            generated_at: Utc::now().to_rfc3339(),
            report,
        }
    }
}

/// Write a report document to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let doc = ReportDocument::new(report, "/home/me/music");
/// write_report(&doc, "report.json")?;
/// ```
pub fn write_report(
    document: &ReportDocument,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing report to: {}", output_path.display());

    super::validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, document).map_err(OutputError::SerializationFailed)?;

    info!(
        "Report written successfully ({} files, {} errors)",
        document.report.files.len(),
        document.report.errors.len()
    );

    Ok(())
}

/// Serialize a report document to a pretty JSON string
pub fn report_to_string(document: &ReportDocument) -> Result<String, OutputError> {
    serde_json::to_string_pretty(document).map_err(OutputError::SerializationFailed)
}

/// Read a report document from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_report(input_path: impl AsRef<Path>) -> Result<ReportDocument, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading report from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let document: ReportDocument =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Report loaded: version {}, target {}",
        document.version, document.target
    );

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    #[test]
    fn test_document_stamps_version() {
        let doc = ReportDocument::new(Report::new(), "doc");
        assert_eq!(doc.version, SCHEMA_VERSION);
        assert_eq!(doc.target, "doc");
        assert!(!doc.generated_at.is_empty());
    }

    #[test]
    fn test_report_to_string_contains_fields() {
        let report = parse_str(
            "H1\tH2\tH3\tH4\tH5\tH6\tH7\tH8\tH9\n3\t0\t100\t2\t1\t5\t0\tfoo.txt\t10:5,50:3\ndoc: nope",
            "doc",
        );
        let json = report_to_string(&ReportDocument::new(report, "doc")).unwrap();
        assert!(json.contains("\"foo.txt\""));
        assert!(json.contains("\"tool_reported_error\""));
        assert!(json.contains("\"offset\": 50"));
    }
}
