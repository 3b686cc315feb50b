//! Line-oriented parsing of performance logs
//!
//! Two line shapes are recognized:
//! - `progress ...` lines, which carry no sample
//! - `final error: <number>` lines, which carry one sample
//!
//! Anything else aborts the run.

use crate::error::{AnalysisError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

const PROGRESS_PREFIX: &str = "progress";
const FINAL_ERROR_PREFIX: &str = "final error";
const VALUE_DELIMITER: &str = ": ";

/// A single numeric "final error" value
pub type Sample = f64;

/// Classification of one log line
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineKind {
    /// Progress line, contributes nothing
    Ignored,
    /// Final error line with its value
    Sample(Sample),
}

/// Classify a single log line
///
/// The value of a `final error` line is the second `": "`-separated field;
/// further fields are dropped.
///
/// # Example
/// ```
/// use errstat::parser::{parse_line, LineKind};
///
/// assert_eq!(parse_line("final error: 2.5").unwrap(), LineKind::Sample(2.5));
/// assert_eq!(parse_line("progress 10%").unwrap(), LineKind::Ignored);
/// assert!(parse_line("garbage line").is_err());
/// ```
pub fn parse_line(line: &str) -> Result<LineKind> {
    if line.starts_with(PROGRESS_PREFIX) {
        return Ok(LineKind::Ignored);
    }

    if !line.starts_with(FINAL_ERROR_PREFIX) {
        return Err(AnalysisError::Parse {
            line: line.to_string(),
        });
    }

    let token = line.split(VALUE_DELIMITER).nth(1).unwrap_or("");
    token
        .trim()
        .parse::<Sample>()
        .map(LineKind::Sample)
        .map_err(|_| AnalysisError::NumericParse {
            line: line.to_string(),
            token: token.to_string(),
        })
}

/// Collect samples from any line source, in order
///
/// Stops at the first unrecognized line or unparseable number. Read
/// failures (including invalid UTF-8) surface as `AnalysisError::Io`.
pub fn extract_samples_from_reader<R: BufRead>(reader: R) -> Result<Vec<Sample>> {
    let mut samples = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;

        match parse_line(&line) {
            Ok(LineKind::Sample(value)) => samples.push(value),
            Ok(LineKind::Ignored) => {}
            Err(e) => {
                tracing::debug!(line_number = index + 1, "rejecting log line");
                return Err(e);
            }
        }
    }

    Ok(samples)
}

/// Read a log file and collect its samples in file order
pub fn extract_samples(path: &Path) -> Result<Vec<Sample>> {
    tracing::debug!(path = %path.display(), "reading log file");

    let file = File::open(path).map_err(|source| AnalysisError::File {
        path: path.to_path_buf(),
        source,
    })?;

    let samples = extract_samples_from_reader(BufReader::new(file)).map_err(|e| match e {
        AnalysisError::Io(source) => AnalysisError::File {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    tracing::debug!(path = %path.display(), samples = samples.len(), "extracted samples");
    Ok(samples)
}
