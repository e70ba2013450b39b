//! Result sinks for parsed reports.
//!
//! This module handles:
//! - JSON report documents (write and read back)
//! - Terminal summaries

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report, ReportDocument};
pub use text::render_report_summary;

use crate::utils::error::OutputError;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
