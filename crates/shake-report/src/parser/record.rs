//! Decoding of a single data line.

use super::fragments::parse_fragment_list;
use super::schema::{ErrorReason, FileRecord, ParseError};
use crate::utils::config::{COLUMNS_WITHOUT_FRAGMENTS, COLUMNS_WITH_FRAGMENTS, FIELD_DELIMITER};
use log::debug;
use std::str::FromStr;

/// Names of the numeric columns, in wire order
const NUMERIC_COLUMNS: [&str; 7] = ["IDEAL", "START", "END", "FRAGC", "CRUMBC", "AGE", "SHOCKED"];

/// Parse one data line into a file record, or classify why it isn't one
///
/// **Public** - called by the report parser for every line after the header
///
/// # Arguments
/// * `line` - Line text without its terminator
/// * `line_number` - 1-based position in the input, used in diagnostics
/// * `has_fragment_detail` - Result of header sniffing
/// * `target` - Scan target; lines starting with it are tool diagnostics.
///   An empty target disables that check.
pub fn parse_record(
    line: &str,
    line_number: usize,
    has_fragment_detail: bool,
    target: &str,
) -> Result<FileRecord, ParseError> {
    if !target.is_empty() && line.starts_with(target) {
        return Err(ParseError::new(
            line_number,
            line,
            ErrorReason::ToolReportedError,
            "reported by tool",
        ));
    }

    let malformed = |detail: String| {
        debug!("Line {} rejected: {}", line_number, detail);
        ParseError::new(line_number, line, ErrorReason::MalformedRecord, detail)
    };

    let columns: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    let expected = if has_fragment_detail {
        COLUMNS_WITH_FRAGMENTS
    } else {
        COLUMNS_WITHOUT_FRAGMENTS
    };
    if columns.len() != expected {
        return Err(malformed(format!(
            "expected {} columns, found {}",
            expected,
            columns.len()
        )));
    }

    let ideal = parse_column(&columns, 0).map_err(&malformed)?;
    let start_block = parse_column(&columns, 1).map_err(&malformed)?;
    let end_block = parse_column(&columns, 2).map_err(&malformed)?;
    let fragment_count = parse_column(&columns, 3).map_err(&malformed)?;
    let crumb_count = parse_column(&columns, 4).map_err(&malformed)?;
    let age = parse_column(&columns, 5).map_err(&malformed)?;
    let guilty = parse_column(&columns, 6).map_err(&malformed)?;

    let fragments = if has_fragment_detail {
        parse_fragment_list(columns[8]).map_err(|detail| {
            debug!("Line {} has a bad fragment list: {}", line_number, detail);
            ParseError::new(
                line_number,
                line,
                ErrorReason::MalformedFragmentList,
                detail,
            )
        })?
    } else {
        Vec::new()
    };

    let record = FileRecord {
        ideal,
        start_block,
        end_block,
        fragment_count,
        crumb_count,
        age,
        guilty,
        name: columns[7].to_string(),
        fragments,
    };

    if has_fragment_detail && !record.fragment_count_matches() {
        debug!(
            "{}: FRAGC is {} but {} fragments listed",
            record.name,
            record.fragment_count,
            record.fragments.len()
        );
    }

    Ok(record)
}

/// Parse one numeric column
///
/// **Private** - internal helper for parse_record
fn parse_column<T>(columns: &[&str], index: usize) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let value = columns[index];
    value
        .parse::<T>()
        .map_err(|e| format!("invalid {} '{}': {}", NUMERIC_COLUMNS[index], value, e))
}
