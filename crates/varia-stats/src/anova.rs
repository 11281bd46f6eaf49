//! One-way analysis of variance
//!
//! Decomposes total variance into between-group and within-group components
//! and tests the null hypothesis of equal group means against the
//! F-distribution with (k - 1, N - k) degrees of freedom.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

use crate::error::{StatsError, StatsResult};

/// Fixed significance threshold used for the verdict flag
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Result of a one-way ANOVA
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnovaResult {
    /// F statistic
    pub f_statistic: f64,
    /// p-value
    pub p_value: f64,
    /// Whether p < 0.05
    pub significant: bool,
    /// Between-groups degrees of freedom (k - 1)
    pub df_between: usize,
    /// Within-groups degrees of freedom (N - k)
    pub df_within: usize,
    /// Between-groups sum of squares
    pub ss_between: f64,
    /// Within-groups sum of squares
    pub ss_within: f64,
    /// Number of groups
    pub n_groups: usize,
    /// Total sample size
    pub n_total: usize,
}

impl AnovaResult {
    /// Mean square between groups
    pub fn ms_between(&self) -> f64 {
        self.ss_between / self.df_between as f64
    }

    /// Mean square within groups
    pub fn ms_within(&self) -> f64 {
        self.ss_within / self.df_within as f64
    }
}

/// One-way ANOVA across two or more groups
///
/// # Arguments
/// * `groups` - One slice of observations per group
///
/// # Returns
/// F statistic, p-value, and the variance decomposition
pub fn one_way_anova(groups: &[&[f64]]) -> StatsResult<AnovaResult> {
    validate_groups(groups)?;

    let k = groups.len();
    let n_total: usize = groups.iter().map(|g| g.len()).sum();

    let grand_mean: f64 =
        groups.iter().flat_map(|g| g.iter()).sum::<f64>() / n_total as f64;

    let means: Vec<f64> = groups
        .iter()
        .map(|g| g.iter().sum::<f64>() / g.len() as f64)
        .collect();

    let ss_between: f64 = groups
        .iter()
        .zip(&means)
        .map(|(g, m)| g.len() as f64 * (m - grand_mean).powi(2))
        .sum();

    let ss_within: f64 = groups
        .iter()
        .zip(&means)
        .map(|(g, m)| g.iter().map(|x| (x - m).powi(2)).sum::<f64>())
        .sum();

    let df_between = k - 1;
    let df_within = n_total - k;

    let ms_within = ss_within / df_within as f64;
    if ms_within <= 0.0 {
        return Err(StatsError::Numerical(
            "within-group variance is zero; F statistic is undefined".into(),
        ));
    }

    let f_statistic = (ss_between / df_between as f64) / ms_within;

    let dist = FisherSnedecor::new(df_between as f64, df_within as f64)
        .map_err(|e| StatsError::Numerical(e.to_string()))?;
    let p_value = (1.0 - dist.cdf(f_statistic)).clamp(0.0, 1.0);

    Ok(AnovaResult {
        f_statistic,
        p_value,
        significant: p_value < SIGNIFICANCE_LEVEL,
        df_between,
        df_within,
        ss_between,
        ss_within,
        n_groups: k,
        n_total,
    })
}

/// Check the minimum group structure required for variance-based tests
pub(crate) fn validate_groups(groups: &[&[f64]]) -> StatsResult<()> {
    if groups.len() < 2 {
        return Err(StatsError::InsufficientGroups {
            found: groups.len(),
        });
    }
    for (index, g) in groups.iter().enumerate() {
        if g.len() < 2 {
            return Err(StatsError::InsufficientObservations {
                index,
                count: g.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anova_known_decomposition() {
        // Means 2, 3, 4; SS_between = 6 over df 2, SS_within = 6 over df 6
        let groups: Vec<&[f64]> = vec![
            &[1.0, 2.0, 3.0],
            &[2.0, 3.0, 4.0],
            &[3.0, 4.0, 5.0],
        ];
        let result = one_way_anova(&groups).unwrap();

        assert!((result.ss_between - 6.0).abs() < 1e-12);
        assert!((result.ss_within - 6.0).abs() < 1e-12);
        assert_eq!(result.df_between, 2);
        assert_eq!(result.df_within, 6);
        assert!((result.f_statistic - 3.0).abs() < 1e-12);
        // F(2, 6) upper tail at 3.0 is about 0.125
        assert!(result.p_value > 0.10 && result.p_value < 0.15);
        assert!(!result.significant);
    }

    #[test]
    fn test_anova_separated_groups() {
        let groups: Vec<&[f64]> = vec![&[10.0, 12.0, 11.0], &[20.0, 22.0, 21.0]];
        let result = one_way_anova(&groups).unwrap();

        assert!((result.f_statistic - 150.0).abs() < 1e-9);
        assert!(result.p_value < 0.001);
        assert!(result.significant);
        assert_eq!(result.n_groups, 2);
        assert_eq!(result.n_total, 6);
    }

    #[test]
    fn test_anova_rejects_single_group() {
        let groups: Vec<&[f64]> = vec![&[1.0, 2.0, 3.0]];
        assert!(matches!(
            one_way_anova(&groups),
            Err(StatsError::InsufficientGroups { found: 1 })
        ));
    }

    #[test]
    fn test_anova_rejects_tiny_group() {
        let groups: Vec<&[f64]> = vec![&[1.0, 2.0], &[3.0]];
        assert!(matches!(
            one_way_anova(&groups),
            Err(StatsError::InsufficientObservations { index: 1, count: 1 })
        ));
    }

    #[test]
    fn test_anova_constant_data() {
        let groups: Vec<&[f64]> = vec![&[1.0, 1.0], &[1.0, 1.0]];
        assert!(matches!(
            one_way_anova(&groups),
            Err(StatsError::Numerical(_))
        ));
    }
}
