//! Configuration and constants for the report parser and runner.

/// Current JSON report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Wire format of the shake report
pub const FIELD_DELIMITER: char = '\t';
pub const FRAGMENT_SEPARATOR: char = ',';
pub const FRAGMENT_PAIR_SEPARATOR: char = ':';

/// Columns per line when the tool runs below verbosity 3
pub const COLUMNS_WITHOUT_FRAGMENTS: usize = 8;

/// Columns per line when the tool appends the FRAGS column
pub const COLUMNS_WITH_FRAGMENTS: usize = 9;

// Tool invocation defaults
pub const DEFAULT_PROGRAM: &str = "shake";
// Pretend mode (never rewrites files), verbosity 3 so fragment detail is emitted
pub const DEFAULT_OPTIONS: &str = "-pvvv";

/// Header emitted by shake, kept for the `schema` command
pub const REPORT_HEADER_COLUMNS: &[&str] = &[
    "IDEAL", "START", "END", "FRAGC", "CRUMBC", "AGE", "SHOCKED", "NAME", "FRAGS",
];
