//! CLI argument parsing for errstat

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "errstat")]
#[command(version)]
#[command(
    about = "Summarize final-error samples from one log, or compare two logs with a z-test",
    long_about = None,
    after_help = "Paths that start with '-' (e.g. a log named --debug) must follow a '--' separator:\n  errstat -- --debug other.log"
)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print debug tracing to stderr (honours RUST_LOG)
    #[arg(long = "debug")]
    pub debug: bool,

    /// One log file to summarize, or two log files to compare (left, right)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// The one or two log files a run operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inputs {
    Single(PathBuf),
    Pair(PathBuf, PathBuf),
}

impl Cli {
    /// Check the positional argument count before any file is touched
    pub fn inputs(&self) -> Result<Inputs, crate::error::AnalysisError> {
        match self.paths.as_slice() {
            [path] => Ok(Inputs::Single(path.clone())),
            [left, right] => Ok(Inputs::Pair(left.clone(), right.clone())),
            other => Err(crate::error::AnalysisError::ArgumentCount {
                args: other.iter().map(|p| p.display().to_string()).collect(),
            }),
        }
    }
}
