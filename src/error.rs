//! Error taxonomy for log analysis
//!
//! Every variant is fatal: callers propagate with `?` and the binary aborts
//! the run without printing a partial report.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading logs and building populations
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("expected 1 or 2 log file paths, got {}: {args:?}", .args.len())]
    ArgumentCount { args: Vec<String> },

    #[error("cannot read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read log input: {0}")]
    Io(#[from] std::io::Error),

    #[error("unrecognized log line: {line:?}")]
    Parse { line: String },

    #[error("invalid number {token:?} in line {line:?}")]
    NumericParse { line: String, token: String },

    #[error("population has no samples")]
    EmptyPopulation,
}

/// Result type for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;
