//! Descriptive statistics for a single sample
//!
//! Provides the per-group summary used throughout varia:
//! count, mean, sample standard deviation, and standard error of the mean.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::{StatsError, StatsResult};

/// Descriptive statistics for a numeric sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Number of values
    pub count: usize,
    /// Mean (average)
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator)
    pub std_dev: f64,
    /// Standard error of the mean (std_dev / sqrt(count))
    pub sem: f64,
}

impl SampleSummary {
    /// Compute summary statistics from data
    pub fn from_data(data: &[f64]) -> Self {
        let count = data.len();
        if count == 0 {
            return Self {
                count: 0,
                mean: f64::NAN,
                std_dev: f64::NAN,
                sem: f64::NAN,
            };
        }

        let sum: f64 = data.iter().sum();
        let mean = sum / count as f64;

        // Sample variance; undefined for a single observation
        let (std_dev, sem) = if count < 2 {
            (f64::NAN, f64::NAN)
        } else {
            let ss: f64 = data.iter().map(|x| (x - mean).powi(2)).sum();
            let std_dev = (ss / (count - 1) as f64).sqrt();
            (std_dev, std_dev / (count as f64).sqrt())
        };

        Self {
            count,
            mean,
            std_dev,
            sem,
        }
    }

    /// Copy with mean, std_dev, and sem rounded to `digits` decimal places
    pub fn rounded(&self, digits: u32) -> Self {
        Self {
            count: self.count,
            mean: round_to(self.mean, digits),
            std_dev: round_to(self.std_dev, digits),
            sem: round_to(self.sem, digits),
        }
    }
}

/// Confidence interval for the mean of a sample, using Student's t
///
/// Returns `(lower, upper)` at the given confidence level (e.g. 0.95).
pub fn mean_confidence_interval(data: &[f64], confidence: f64) -> StatsResult<(f64, f64)> {
    if !(0.0..1.0).contains(&confidence) || confidence == 0.0 {
        return Err(StatsError::InvalidAlpha(1.0 - confidence));
    }
    if data.len() < 2 {
        return Err(StatsError::InsufficientObservations {
            index: 0,
            count: data.len(),
        });
    }

    let summary = SampleSummary::from_data(data);
    let df = (summary.count - 1) as f64;
    let dist = StudentsT::new(0.0, 1.0, df).map_err(|e| StatsError::Numerical(e.to_string()))?;
    let t = dist.inverse_cdf(0.5 + confidence / 2.0);
    let half_width = t * summary.sem;
    Ok((summary.mean - half_width, summary.mean + half_width))
}

/// Round a value to `digits` decimal places
pub fn round_to(value: f64, digits: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_basic() {
        let summary = SampleSummary::from_data(&[10.0, 12.0, 11.0]);
        assert_eq!(summary.count, 3);
        assert!((summary.mean - 11.0).abs() < 1e-12);
        assert!((summary.std_dev - 1.0).abs() < 1e-12);
        assert!((summary.sem - 1.0 / 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_summary_sem_relation() {
        let data = [3.1, 4.7, 2.8, 5.5, 4.0, 3.3];
        let summary = SampleSummary::from_data(&data);
        assert!(summary.std_dev >= 0.0);
        let expected_sem = summary.std_dev / (summary.count as f64).sqrt();
        assert!((summary.sem - expected_sem).abs() < 1e-12);
    }

    #[test]
    fn test_summary_empty_and_single() {
        let empty = SampleSummary::from_data(&[]);
        assert_eq!(empty.count, 0);
        assert!(empty.mean.is_nan());

        let single = SampleSummary::from_data(&[5.0]);
        assert_eq!(single.count, 1);
        assert!((single.mean - 5.0).abs() < 1e-12);
        assert!(single.std_dev.is_nan());
    }

    #[test]
    fn test_mean_confidence_interval() {
        // n = 4, mean 2.5, std ~1.29, t(0.975; 3) = 3.1824
        let data = [1.0, 2.0, 3.0, 4.0];
        let (lower, upper) = mean_confidence_interval(&data, 0.95).unwrap();
        assert!((lower - 0.4457).abs() < 1e-3, "lower = {lower}");
        assert!((upper - 4.5543).abs() < 1e-3, "upper = {upper}");

        assert!(mean_confidence_interval(&[1.0], 0.95).is_err());
        assert!(mean_confidence_interval(&data, 0.0).is_err());
    }

    #[test]
    fn test_rounding() {
        let summary = SampleSummary::from_data(&[1.0, 2.0]).rounded(4);
        assert!((summary.mean - 1.5).abs() < 1e-12);
        assert_eq!(round_to(0.123456, 4), 0.1235);
        assert_eq!(round_to(2.0, 4), 2.0);
        assert!(round_to(f64::NAN, 4).is_nan());
    }
}
