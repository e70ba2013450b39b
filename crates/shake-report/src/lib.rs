//! Shake Report library
//!
//! Turns the tab-separated report printed by the `shake` defragmenter into
//! typed per-file records, keeping tool diagnostics and malformed lines as
//! separate errors instead of aborting.
//!
//! ```ignore
//! use shake_report::parser::parse_report;
//!
//! let report = parse_report(std::io::stdin().lock(), "/home/me/music")?;
//! for file in report.guilty_files() {
//!     println!("{} has {} fragments", file.name, file.fragment_count);
//! }
//! ```

pub mod commands;
pub mod output;
pub mod parser;
pub mod runner;
pub mod utils;
