//! Population summaries built from final-error samples

use crate::error::{AnalysisError, Result};
use crate::parser::Sample;
use serde::Serialize;

/// Samples from one log plus their descriptive statistics
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    /// Samples in file order
    pub samples: Vec<Sample>,
    /// Number of samples (always `samples.len()`)
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (Bessel's correction, `n - 1`)
    ///
    /// NaN for a single sample: `0.0 / 0.0` is left to float semantics.
    pub standard_deviation: f64,
}

/// One-standard-deviation interval around the mean
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bound {
    pub low: f64,
    pub high: f64,
}

/// Build a population summary from samples
///
/// # Example
/// ```
/// use errstat::population::build_population;
///
/// let p = build_population(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(p.count, 5);
/// assert_eq!(p.mean, 3.0);
/// assert!((p.standard_deviation - 2.5f64.sqrt()).abs() < 1e-12);
/// ```
pub fn build_population(samples: Vec<Sample>) -> Result<Population> {
    if samples.is_empty() {
        return Err(AnalysisError::EmptyPopulation);
    }

    let count = samples.len();
    let mean = samples.iter().sum::<f64>() / count as f64;
    let squared_deviations: f64 = samples.iter().map(|x| (x - mean).powi(2)).sum();
    let standard_deviation = (squared_deviations / (count - 1) as f64).sqrt();

    tracing::trace!(count, mean, standard_deviation, "built population");

    Ok(Population {
        samples,
        count,
        mean,
        standard_deviation,
    })
}

impl Population {
    /// `mean ± standard_deviation`
    ///
    /// Reported under a "95%" label, but this is one sigma, not a 95% interval.
    pub fn bound(&self) -> Bound {
        Bound {
            low: self.mean - self.standard_deviation,
            high: self.mean + self.standard_deviation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_to_five() {
        let p = build_population(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(p.count, 5);
        assert_eq!(p.mean, 3.0);
        assert!((p.standard_deviation - 1.5811).abs() < 1e-4);
    }

    #[test]
    fn test_bound_is_one_sigma() {
        let p = build_population(vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let bound = p.bound();
        assert!((bound.low - (3.0 - 2.5f64.sqrt())).abs() < 1e-12);
        assert!((bound.high - (3.0 + 2.5f64.sqrt())).abs() < 1e-12);
    }

    #[test]
    fn test_constant_samples_zero_deviation() {
        let p = build_population(vec![7.0, 7.0, 7.0]).unwrap();
        assert_eq!(p.standard_deviation, 0.0);
        assert_eq!(p.bound(), Bound { low: 7.0, high: 7.0 });
    }

    #[test]
    fn test_empty_population_rejected() {
        assert!(matches!(
            build_population(Vec::new()),
            Err(AnalysisError::EmptyPopulation)
        ));
    }

    #[test]
    fn test_single_sample_deviation_is_nan() {
        let p = build_population(vec![4.2]).unwrap();
        assert_eq!(p.count, 1);
        assert_eq!(p.mean, 4.2);
        assert!(p.standard_deviation.is_nan());
    }

    #[test]
    fn test_samples_retained_in_order() {
        let p = build_population(vec![3.0, 1.0, 2.0]).unwrap();
        assert_eq!(p.samples, vec![3.0, 1.0, 2.0]);
        assert_eq!(p.count, p.samples.len());
    }
}
