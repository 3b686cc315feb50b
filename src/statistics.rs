// Two-sample comparison of final-error populations
//
// - Standard error is the variance of the mean estimator: stddev^2 / n
// - z compares the two means against the pooled standard error
// - p is the normal CDF at z, evaluated through a tanh-based erf
//   approximation: erf(x) ~ tanh(2/sqrt(pi) * (x + 11/123 * x^3))
//
// Reported p values depend on this exact approximation; do not swap in a
// library erf.

use crate::population::Population;
use std::f64::consts::{PI, SQRT_2};

/// Cubic coefficient of the erf approximation
const ERF_CUBIC_COEFFICIENT: f64 = 11.0 / 123.0;

/// Result of comparing two populations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    /// Standardized difference of means (left - right)
    pub z_score: f64,
    /// Normal CDF at `z_score`; 0.5 means no difference
    pub p_value: f64,
}

/// `stddev^2 / count`
pub fn standard_error(p: &Population) -> f64 {
    p.standard_deviation.powi(2) / p.count as f64
}

pub fn z_score(p0: &Population, p1: &Population) -> f64 {
    (p0.mean - p1.mean) / (standard_error(p0) + standard_error(p1)).sqrt()
}

pub fn p_value(p0: &Population, p1: &Population) -> f64 {
    p_value_from_z(z_score(p0, p1))
}

fn p_value_from_z(z: f64) -> f64 {
    0.5 * (1.0 + approx_erf(z / SQRT_2))
}

/// Polynomial-inside-tanh approximation of the Gauss error function
///
/// # Example
/// ```
/// use errstat::statistics::approx_erf;
///
/// assert_eq!(approx_erf(0.0), 0.0);
/// assert!((approx_erf(1.0) - 0.8427).abs() < 1e-3);
/// ```
pub fn approx_erf(x: f64) -> f64 {
    ((2.0 / PI.sqrt()) * (x + ERF_CUBIC_COEFFICIENT * x.powi(3))).tanh()
}

/// Compute z and p for two populations
pub fn compare(p0: &Population, p1: &Population) -> Comparison {
    let z_score = z_score(p0, p1);
    let p_value = p_value_from_z(z_score);

    tracing::debug!(z_score, p_value, "compared populations");

    Comparison { z_score, p_value }
}

/// `round(value * 10^places) / 10^places`, halves rounded away from zero
pub fn round_places(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}
