//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod parse;
pub mod scan;
pub mod utils;

// Re-export main command functions
pub use models::{ParseArgs, ScanArgs};
pub use parse::{execute_parse, open_input, validate_parse_args};
pub use scan::{execute_scan, resolve_command, validate_args};
pub use utils::{display_schema, display_version, validate_report_file};
