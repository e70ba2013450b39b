//! Report parsing and the typed report model.
//!
//! This module handles:
//! - Sniffing the header for fragment detail
//! - Decoding data lines into file records
//! - Decoding fragment lists
//! - Partitioning tool diagnostics and malformed lines into errors

pub mod fragments;
pub mod header;
pub mod record;
pub mod report;
pub mod schema;

// Re-export main types
pub use fragments::parse_fragment_list;
pub use header::sniff_header;
pub use record::parse_record;
pub use report::{parse_lines, parse_report, parse_str, ReportParser};
pub use schema::{ErrorReason, FileRecord, Fragment, ParseError, Report};
