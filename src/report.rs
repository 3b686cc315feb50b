//! Human-readable report for one or two populations
//!
//! The text layout is consumed by downstream scripts and must not change:
//!
//! ```text
//! 95% of samples fall between: 1.4 - 4.6
//! standard deviation: 1.58
//! ```
//!
//! or, comparing two logs:
//!
//! ```text
//! 95% of samples fall between:
//! for left: 1.4 - 4.6
//! for right: 2.4 - 5.6
//! z value: -1.0
//! p value: 0.159
//! ```

use crate::population::{Bound, Population};
use crate::statistics::{compare, round_places, Comparison};
use std::io::{self, Write};
use std::path::PathBuf;

/// Rounding applied to each reported value
///
/// # Example
/// ```
/// use errstat::report::ReportConfig;
///
/// let config = ReportConfig::default();
/// assert_eq!(config.bound_places, 1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Decimal places for bound endpoints
    pub bound_places: u32,
    /// Decimal places for the single-log standard deviation
    pub deviation_places: u32,
    /// Decimal places for the z value
    pub z_places: u32,
    /// Decimal places for the p value
    pub p_places: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            bound_places: 1,
            deviation_places: 2,
            z_places: 3,
            p_places: 3,
        }
    }
}

/// f64 carries about 15 significant decimal digits
const MAX_PLACES: u32 = 15;

impl ReportConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, places) in [
            ("bound_places", self.bound_places),
            ("deviation_places", self.deviation_places),
            ("z_places", self.z_places),
            ("p_places", self.p_places),
        ] {
            if places > MAX_PLACES {
                return Err(format!(
                    "{} must be <= {}, got {}",
                    name, MAX_PLACES, places
                ));
            }
        }
        Ok(())
    }

    pub(crate) fn round_bound(&self, bound: Bound) -> Bound {
        Bound {
            low: round_places(bound.low, self.bound_places),
            high: round_places(bound.high, self.bound_places),
        }
    }
}

/// A population together with the log it came from
#[derive(Debug, Clone)]
pub struct LogPopulation {
    pub path: PathBuf,
    pub population: Population,
}

/// Everything a run reports
#[derive(Debug, Clone)]
pub enum Report {
    /// One log: its bound and standard deviation
    Single(LogPopulation),
    /// Two logs: both bounds plus the z-test
    Compare {
        left: LogPopulation,
        right: LogPopulation,
        comparison: Comparison,
    },
}

impl Report {
    pub fn single(log: LogPopulation) -> Self {
        Report::Single(log)
    }

    /// Compare `left` against `right` (z is positive when left's mean is larger)
    pub fn compare(left: LogPopulation, right: LogPopulation) -> Self {
        let comparison = compare(&left.population, &right.population);
        Report::Compare {
            left,
            right,
            comparison,
        }
    }

    /// Write the text report
    pub fn write_text<W: Write>(&self, out: &mut W, config: &ReportConfig) -> io::Result<()> {
        match self {
            Report::Single(log) => {
                let p = &log.population;
                writeln!(
                    out,
                    "95% of samples fall between: {}",
                    format_bound(config.round_bound(p.bound()))
                )?;
                writeln!(
                    out,
                    "standard deviation: {}",
                    format_number(round_places(p.standard_deviation, config.deviation_places))
                )?;
            }
            Report::Compare {
                left,
                right,
                comparison,
            } => {
                writeln!(out, "95% of samples fall between: ")?;
                writeln!(
                    out,
                    "for left: {}",
                    format_bound(config.round_bound(left.population.bound()))
                )?;
                writeln!(
                    out,
                    "for right: {}",
                    format_bound(config.round_bound(right.population.bound()))
                )?;
                writeln!(
                    out,
                    "z value: {}",
                    format_number(round_places(comparison.z_score, config.z_places))
                )?;
                writeln!(
                    out,
                    "p value: {}",
                    format_number(round_places(comparison.p_value, config.p_places))
                )?;
            }
        }
        Ok(())
    }

    /// Render the text report into a string
    pub fn to_report_string(&self, config: &ReportConfig) -> io::Result<String> {
        let mut buf = Vec::new();
        self.write_text(&mut buf, config)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn format_bound(bound: Bound) -> String {
    format!("{} - {}", format_number(bound.low), format_number(bound.high))
}

/// Shortest round-trip form, whole values keep one decimal (`3.0`, not `3`)
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::population::build_population;

    fn log(path: &str, samples: &[f64]) -> LogPopulation {
        LogPopulation {
            path: PathBuf::from(path),
            population: build_population(samples.to_vec()).unwrap(),
        }
    }

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.bound_places, 1);
        assert_eq!(config.deviation_places, 2);
        assert_eq!(config.z_places, 3);
        assert_eq!(config.p_places, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_places() {
        let config = ReportConfig {
            p_places: 16,
            ..ReportConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("p_places"));
    }

    #[test]
    fn test_single_report_text() {
        let report = Report::single(log("run.log", &[1.0, 2.0, 3.0, 4.0, 5.0]));
        assert_eq!(
            report.to_report_string(&ReportConfig::default()).unwrap(),
            "95% of samples fall between: 1.4 - 4.6\nstandard deviation: 1.58\n"
        );
    }

    #[test]
    fn test_compare_report_text() {
        let report = Report::compare(
            log("left.log", &[1.0, 2.0, 3.0, 4.0, 5.0]),
            log("right.log", &[2.0, 3.0, 4.0, 5.0, 6.0]),
        );
        assert_eq!(
            report.to_report_string(&ReportConfig::default()).unwrap(),
            "95% of samples fall between: \n\
             for left: 1.4 - 4.6\n\
             for right: 2.4 - 5.6\n\
             z value: -1.0\n\
             p value: 0.159\n"
        );
    }

    #[test]
    fn test_compare_identical_text() {
        let samples = [0.25, 0.5, 0.75];
        let report = Report::compare(log("a.log", &samples), log("b.log", &samples));
        let text = report.to_report_string(&ReportConfig::default()).unwrap();
        assert!(text.contains("z value: 0.0\n"));
        assert!(text.contains("p value: 0.5\n"));
    }

    #[test]
    fn test_single_sample_reports_nan() {
        let report = Report::single(log("one.log", &[2.0]));
        assert_eq!(
            report.to_report_string(&ReportConfig::default()).unwrap(),
            "95% of samples fall between: NaN - NaN\nstandard deviation: NaN\n"
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3.0");
        assert_eq!(format_number(-1.0), "-1.0");
        assert_eq!(format_number(0.159), "0.159");
        assert_eq!(format_number(1.58), "1.58");
        assert_eq!(format_number(f64::INFINITY), "inf");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_propagates() {
        let report = Report::single(log("run.log", &[1.0, 2.0]));
        assert!(report
            .write_text(&mut FailingWriter, &ReportConfig::default())
            .is_err());
    }
}
