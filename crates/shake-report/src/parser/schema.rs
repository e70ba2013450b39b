//! Typed model of a parsed shake report.
//!
//! Every value here is built once while parsing and then owned by [`Report`].

use serde::{Deserialize, Serialize};

/// One contiguous on-disk extent of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Position of the first block
    pub offset: u64,

    /// Extent size, always non-zero
    pub length: u64,
}

impl Fragment {
    pub fn new(offset: u64, length: u64) -> Self {
        Self { offset, length }
    }
}

/// Fragmentation metrics for one scanned file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Where the tool estimates the file would ideally start
    pub ideal: i64,

    /// Position of the first block
    pub start_block: i64,

    /// Position of the last block
    pub end_block: i64,

    /// Number of fragments reported by the tool
    pub fragment_count: u32,

    /// Number of fragments below the tool's crumb ratio
    pub crumb_count: u32,

    /// Age in days
    pub age: i64,

    /// Tool's verdict code (SHOCKED column), kept as-is
    pub guilty: i32,

    /// Path as printed by the tool
    pub name: String,

    /// On-disk fragments in tool order; empty without fragment detail
    pub fragments: Vec<Fragment>,
}

impl FileRecord {
    /// Whether the tool flagged this file
    pub fn is_guilty(&self) -> bool {
        self.guilty != 0
    }

    /// More than one fragment on disk
    pub fn is_fragmented(&self) -> bool {
        self.fragment_count > 1
    }

    /// Fragment list length agrees with the FRAGC column.
    ///
    /// Only meaningful for reports carrying fragment detail.
    pub fn fragment_count_matches(&self) -> bool {
        self.fragments.len() == self.fragment_count as usize
    }
}

/// Why a line did not become a [`FileRecord`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorReason {
    /// The tool printed its own diagnostic, prefixed by the scan target
    ToolReportedError,

    /// The FRAGS column is not a list of `offset:length` pairs
    MalformedFragmentList,

    /// Wrong column count or a non-integer numeric field
    MalformedRecord,
}

impl std::fmt::Display for ErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ErrorReason::ToolReportedError => "tool error",
            ErrorReason::MalformedFragmentList => "malformed fragment list",
            ErrorReason::MalformedRecord => "malformed record",
        };
        f.write_str(label)
    }
}

/// A report line that was recorded instead of parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    /// 1-based line number in the input, header included
    pub line_number: usize,

    /// Line text without its line terminator
    pub raw_line: String,

    pub reason: ErrorReason,

    /// Human-readable cause
    pub detail: String,
}

impl ParseError {
    pub fn new(
        line_number: usize,
        raw_line: impl Into<String>,
        reason: ErrorReason,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            line_number,
            raw_line: raw_line.into(),
            reason,
            detail: detail.into(),
        }
    }
}

/// Everything extracted from one report stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Whether the header announced the FRAGS column
    pub has_fragment_detail: bool,

    /// Parsed files in input order
    pub files: Vec<FileRecord>,

    /// Rejected lines in input order
    pub errors: Vec<ParseError>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// No line was rejected
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Sum of FRAGC over all files
    pub fn total_fragments(&self) -> u64 {
        self.files.iter().map(|f| u64::from(f.fragment_count)).sum()
    }

    pub fn guilty_files(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.iter().filter(|f| f.is_guilty())
    }

    pub fn fragmented_files(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.iter().filter(|f| f.is_fragmented())
    }

    pub fn errors_by_reason(&self, reason: ErrorReason) -> impl Iterator<Item = &ParseError> {
        self.errors.iter().filter(move |e| e.reason == reason)
    }

    /// Look up a file by the name the tool printed
    pub fn find_file(&self, name: &str) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.name == name)
    }
}
