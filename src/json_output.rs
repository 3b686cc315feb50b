//! JSON output format for reports
//!
//! Carries the same rounded values as the text report plus sample counts
//! and unrounded means. Non-finite values serialize as `null`.

use crate::population::Bound;
use crate::report::{LogPopulation, Report, ReportConfig};
use crate::statistics::round_places;
use serde::Serialize;

/// Summary of one log's population
#[derive(Debug, Clone, Serialize)]
pub struct JsonPopulation {
    /// Log file path as given on the command line
    pub path: String,
    /// Number of final-error samples
    pub count: usize,
    /// Unrounded mean
    pub mean: f64,
    pub standard_deviation: f64,
    /// One-sigma bound around the mean
    pub bound: Bound,
}

/// Report body, tagged by mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum JsonReportBody {
    Single {
        population: JsonPopulation,
    },
    Compare {
        left: JsonPopulation,
        right: JsonPopulation,
        z_value: f64,
        p_value: f64,
    },
}

/// Complete JSON document
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// Format version identifier
    pub format: String,
    #[serde(flatten)]
    pub report: JsonReportBody,
}

impl JsonOutput {
    pub fn from_report(report: &Report, config: &ReportConfig) -> Self {
        let body = match report {
            Report::Single(log) => JsonReportBody::Single {
                population: json_population(log, config),
            },
            Report::Compare {
                left,
                right,
                comparison,
            } => JsonReportBody::Compare {
                left: json_population(left, config),
                right: json_population(right, config),
                z_value: round_places(comparison.z_score, config.z_places),
                p_value: round_places(comparison.p_value, config.p_places),
            },
        };

        Self {
            format: "errstat-json-v1".to_string(),
            report: body,
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn json_population(log: &LogPopulation, config: &ReportConfig) -> JsonPopulation {
    let p = &log.population;
    JsonPopulation {
        path: log.path.display().to_string(),
        count: p.count,
        mean: p.mean,
        standard_deviation: round_places(p.standard_deviation, config.deviation_places),
        bound: config.round_bound(p.bound()),
    }
}
