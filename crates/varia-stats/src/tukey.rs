//! Tukey's HSD post-hoc test
//!
//! Compares every unordered pair of groups after a one-way ANOVA, using the
//! studentized range distribution to control the family-wise error rate.
//! Unequal group sizes use the Tukey-Kramer standard error.

use serde::{Deserialize, Serialize};

use crate::anova::validate_groups;
use crate::error::{StatsError, StatsResult};
use crate::range;

/// One pairwise comparison from the Tukey HSD test
///
/// Group indices refer to the order the groups were supplied in; callers
/// attach labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairwiseComparison {
    /// Index of the first group of the pair
    pub group_a: usize,
    /// Index of the second group of the pair
    pub group_b: usize,
    /// mean(group_b) - mean(group_a)
    pub mean_diff: f64,
    /// Family-wise adjusted p-value
    pub p_adjusted: f64,
    /// Lower simultaneous confidence bound for the mean difference
    pub ci_lower: f64,
    /// Upper simultaneous confidence bound for the mean difference
    pub ci_upper: f64,
    /// Whether the null hypothesis of equal means is rejected
    pub reject: bool,
}

/// Tukey HSD across all unordered pairs of groups
///
/// # Arguments
/// * `groups` - One slice of observations per group
/// * `alpha` - Family-wise error rate (0.05 for the library default)
pub fn tukey_hsd(groups: &[&[f64]], alpha: f64) -> StatsResult<Vec<PairwiseComparison>> {
    if !(0.0..1.0).contains(&alpha) || alpha == 0.0 {
        return Err(StatsError::InvalidAlpha(alpha));
    }
    validate_groups(groups)?;

    let k = groups.len();
    let n_total: usize = groups.iter().map(|g| g.len()).sum();
    let df_within = (n_total - k) as f64;

    let means: Vec<f64> = groups
        .iter()
        .map(|g| g.iter().sum::<f64>() / g.len() as f64)
        .collect();

    let ss_within: f64 = groups
        .iter()
        .zip(&means)
        .map(|(g, m)| g.iter().map(|x| (x - m).powi(2)).sum::<f64>())
        .sum();
    let ms_within = ss_within / df_within;
    if ms_within <= 0.0 {
        return Err(StatsError::Numerical(
            "within-group variance is zero; studentized range is undefined".into(),
        ));
    }

    let q_critical = range::critical_value(alpha, k, df_within)?;

    let mut comparisons = Vec::with_capacity(k * (k - 1) / 2);
    for a in 0..k {
        for b in (a + 1)..k {
            let n_a = groups[a].len() as f64;
            let n_b = groups[b].len() as f64;
            let std_err = (ms_within / 2.0 * (1.0 / n_a + 1.0 / n_b)).sqrt();

            let mean_diff = means[b] - means[a];
            let q_statistic = mean_diff.abs() / std_err;
            let p_adjusted = range::survival(q_statistic, k, df_within);
            let half_width = q_critical * std_err;

            comparisons.push(PairwiseComparison {
                group_a: a,
                group_b: b,
                mean_diff,
                p_adjusted,
                ci_lower: mean_diff - half_width,
                ci_upper: mean_diff + half_width,
                reject: p_adjusted < alpha,
            });
        }
    }

    Ok(comparisons)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tukey_flags_separated_pair() {
        let groups: Vec<&[f64]> = vec![&[10.0, 12.0, 11.0], &[20.0, 22.0, 21.0]];
        let result = tukey_hsd(&groups, 0.05).unwrap();

        assert_eq!(result.len(), 1);
        let pair = &result[0];
        assert_eq!((pair.group_a, pair.group_b), (0, 1));
        assert!((pair.mean_diff - 10.0).abs() < 1e-12);
        assert!(pair.p_adjusted < 0.001);
        assert!(pair.reject);
        // CI should exclude zero for a rejected pair
        assert!(pair.ci_lower > 0.0);
    }

    #[test]
    fn test_tukey_offset_group_among_three() {
        let groups: Vec<&[f64]> = vec![
            &[5.0, 5.2, 4.8, 5.1, 4.9],
            &[5.1, 4.9, 5.0, 5.2, 4.8],
            &[9.0, 9.2, 8.8, 9.1, 8.9],
        ];
        let result = tukey_hsd(&groups, 0.05).unwrap();
        assert_eq!(result.len(), 3);

        for pair in &result {
            let involves_offset = pair.group_b == 2;
            assert_eq!(pair.reject, involves_offset, "pair {:?}", pair);
        }
    }

    #[test]
    fn test_tukey_ci_brackets_mean_diff() {
        let groups: Vec<&[f64]> = vec![&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0], &[3.0, 4.0, 5.0]];
        for pair in tukey_hsd(&groups, 0.05).unwrap() {
            assert!(pair.ci_lower <= pair.mean_diff);
            assert!(pair.mean_diff <= pair.ci_upper);
            // Interval symmetric about the difference
            let lower_gap = pair.mean_diff - pair.ci_lower;
            let upper_gap = pair.ci_upper - pair.mean_diff;
            assert!((lower_gap - upper_gap).abs() < 1e-9);
        }
    }

    #[test]
    fn test_tukey_guards() {
        let one: Vec<&[f64]> = vec![&[1.0, 2.0]];
        assert!(tukey_hsd(&one, 0.05).is_err());

        let groups: Vec<&[f64]> = vec![&[1.0, 2.0], &[3.0, 4.0]];
        assert!(tukey_hsd(&groups, 0.0).is_err());
    }
}
