//! Error types for the entire library.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in commands and main.rs.
//!
//! Problems with a single report line are not errors here: they are recorded
//! as [`crate::parser::ParseError`] values inside the report.

use crate::parser::Report;
use thiserror::Error;

/// Fatal failure while pulling lines from the report stream
#[derive(Error, Debug)]
pub enum ReportError {
    /// The line source broke. `partial` holds everything parsed before line `line`.
    #[error("Failed to read report line {line}: {source}")]
    Stream {
        line: usize,
        #[source]
        source: std::io::Error,
        partial: Box<Report>,
    },
}

impl ReportError {
    /// Report accumulated before the stream failed
    pub fn partial_report(&self) -> &Report {
        match self {
            ReportError::Stream { partial, .. } => partial,
        }
    }

    /// Consume the error, keeping the partial report
    pub fn into_partial_report(self) -> Report {
        match self {
            ReportError::Stream { partial, .. } => *partial,
        }
    }
}

/// Errors that can occur while running the shake tool
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Failed to spawn '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Tool stdout was not captured")]
    MissingStdout,

    #[error("Failed to wait for tool: {0}")]
    WaitFailed(#[source] std::io::Error),

    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while loading a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),
}
