//! Univariate outlier rules.
//!
//! Each rule takes the non-missing values of one column and returns the
//! positions (into that slice, ascending) of the values it flags. Rules are
//! pure: they never see row identities or the source table.

use outlier_model::{DegenerateReason, OutlierMethod};

/// Fence multiplier applied to the interquartile range.
pub const IQR_THRESHOLD: f64 = 1.5;

/// Absolute z-score above which a value is flagged.
pub const ZSCORE_THRESHOLD: f64 = 3.0;

/// Result of running a rule over one column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Positions of flagged values, ascending.
    pub flagged: Vec<usize>,
    /// Set when the statistic fell back to its degenerate value.
    pub degenerate: Option<DegenerateReason>,
}

/// Lower and upper fences of the interquartile rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrFences {
    pub q1: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
}

impl IqrFences {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Mean and population standard deviation of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScoreStats {
    pub mean: f64,
    pub std_dev: f64,
}

impl ZScoreStats {
    pub fn zscore(&self, value: f64) -> f64 {
        ((value - self.mean) / self.std_dev).abs()
    }
}

/// Run the rule selected by `method`.
pub fn detect(method: OutlierMethod, values: &[f64]) -> RuleOutcome {
    match method {
        OutlierMethod::Interquartile => detect_interquartile(values),
        OutlierMethod::ZScore => detect_zscore(values),
    }
}

/// Flag values outside `[Q1 - 1.5 * IQR, Q3 + 1.5 * IQR]`.
pub fn detect_interquartile(values: &[f64]) -> RuleOutcome {
    let Some(fences) = iqr_fences(values) else {
        return RuleOutcome::default();
    };
    RuleOutcome {
        flagged: flag_where(values, |value| fences.is_outlier(value)),
        degenerate: None,
    }
}

/// Flag values whose absolute z-score exceeds 3.
///
/// A column with zero variance has no outliers and reports
/// [`DegenerateReason::ZeroVariance`].
pub fn detect_zscore(values: &[f64]) -> RuleOutcome {
    let Some(first) = values.first() else {
        return RuleOutcome::default();
    };
    if values.iter().all(|value| value == first) {
        return RuleOutcome {
            flagged: Vec::new(),
            degenerate: Some(DegenerateReason::ZeroVariance),
        };
    }
    let Some(stats) = zscore_stats(values) else {
        return RuleOutcome::default();
    };
    if stats.std_dev == 0.0 {
        return RuleOutcome {
            flagged: Vec::new(),
            degenerate: Some(DegenerateReason::ZeroVariance),
        };
    }
    RuleOutcome {
        flagged: flag_where(values, |value| stats.zscore(value) > ZSCORE_THRESHOLD),
        degenerate: None,
    }
}

/// Quartile fences for `values`, or `None` when there are no values.
pub fn iqr_fences(values: &[f64]) -> Option<IqrFences> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let q1 = quantile_sorted(&sorted, 0.25)?;
    let q3 = quantile_sorted(&sorted, 0.75)?;
    let iqr = q3 - q1;
    Some(IqrFences {
        q1,
        q3,
        lower: q1 - IQR_THRESHOLD * iqr,
        upper: q3 + IQR_THRESHOLD * iqr,
    })
}

/// Mean and population (divisor `n`) standard deviation, or `None` when empty.
pub fn zscore_stats(values: &[f64]) -> Option<ZScoreStats> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values
        .iter()
        .map(|value| (value - mean).powi(2))
        .sum::<f64>()
        / n;
    Some(ZScoreStats {
        mean,
        std_dev: variance.sqrt(),
    })
}

/// Quantile of already sorted data with linear interpolation between ranks.
///
/// The rank is `(n - 1) * q`; a fractional rank interpolates between its
/// floor and ceiling neighbours.
///
/// # Examples
///
/// ```
/// use outlier_core::rules::quantile_sorted;
///
/// let sorted = [10.0, 11.0, 12.0, 13.0];
/// assert_eq!(quantile_sorted(&sorted, 0.25), Some(10.75));
/// assert_eq!(quantile_sorted(&sorted, 0.5), Some(11.5));
/// assert_eq!(quantile_sorted(&[], 0.5), None);
/// ```
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let rank = (sorted.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}

fn flag_where(values: &[f64], predicate: impl Fn(f64) -> bool) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter(|(_, value)| predicate(**value))
        .map(|(pos, _)| pos)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantiles_interpolate_between_ranks() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        // rank 1.25 -> 2.25, rank 3.75 -> 4.75
        assert_eq!(quantile_sorted(&sorted, 0.25), Some(2.25));
        assert_eq!(quantile_sorted(&sorted, 0.75), Some(4.75));
        assert_eq!(quantile_sorted(&[7.0], 0.25), Some(7.0));
    }

    #[test]
    fn iqr_flags_values_beyond_fences() {
        let values = [10.0, 12.0, 11.0, 13.0, 200.0];
        let fences = iqr_fences(&values).unwrap();
        assert_eq!(fences.q1, 11.0);
        assert_eq!(fences.q3, 13.0);
        assert_eq!(fences.iqr(), 2.0);
        assert_eq!(fences.lower, 8.0);
        assert_eq!(fences.upper, 16.0);

        let outcome = detect_interquartile(&values);
        assert_eq!(outcome.flagged, vec![4]);
        assert_eq!(outcome.degenerate, None);
    }

    #[test]
    fn iqr_flags_low_values_too() {
        let values = [-500.0, 10.0, 11.0, 12.0, 13.0];
        assert_eq!(detect_interquartile(&values).flagged, vec![0]);
    }

    #[test]
    fn iqr_keeps_values_on_the_fence() {
        // q1 = 2, q3 = 4, fences at -1 and 7
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 7.0, 2.0, 4.0, -1.0];
        let fences = iqr_fences(&values).unwrap();
        assert_eq!(fences.lower, -1.0);
        assert_eq!(fences.upper, 7.0);
        assert!(detect_interquartile(&values).flagged.is_empty());
    }

    #[test]
    fn zscore_flags_far_value() {
        let mut values = Vec::new();
        for _ in 0..3 {
            values.extend([1.0, 2.0, 3.0, 4.0, 5.0]);
        }
        values.push(100.0);
        let outcome = detect_zscore(&values);
        assert_eq!(outcome.flagged, vec![15]);
        assert_eq!(outcome.degenerate, None);
    }

    #[test]
    fn zscore_cannot_fire_on_six_values() {
        // Population z-scores are bounded by sqrt(n - 1) = 2.236 for n = 6.
        let values = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let stats = zscore_stats(&values).unwrap();
        assert!(stats.zscore(100.0) < ZSCORE_THRESHOLD);
        assert!(stats.zscore(100.0) <= 5f64.sqrt() + 1e-12);
        assert!(detect_zscore(&values).flagged.is_empty());
    }

    #[test]
    fn zscore_uses_population_std_dev() {
        let stats = zscore_stats(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std_dev, 2.0);
    }

    #[test]
    fn zscore_zero_variance_is_degenerate() {
        let outcome = detect_zscore(&[4.2, 4.2, 4.2]);
        assert!(outcome.flagged.is_empty());
        assert_eq!(outcome.degenerate, Some(DegenerateReason::ZeroVariance));

        let single = detect_zscore(&[1.0]);
        assert_eq!(single.degenerate, Some(DegenerateReason::ZeroVariance));
    }

    #[test]
    fn iqr_on_constant_values_flags_only_deviants() {
        let values = [3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 3.0, 9.0];
        assert_eq!(detect_interquartile(&values).flagged, vec![7]);
    }

    #[test]
    fn empty_input_yields_no_outliers() {
        for method in OutlierMethod::ALL {
            assert_eq!(detect(method, &[]), RuleOutcome::default());
        }
    }

    #[test]
    fn detect_dispatches_on_method() {
        let values = [10.0, 12.0, 11.0, 13.0, 200.0];
        assert_eq!(detect(OutlierMethod::Interquartile, &values).flagged, vec![4]);
        // Five values bound the z-score at 2, so nothing is flagged.
        assert!(detect(OutlierMethod::ZScore, &values).flagged.is_empty());
    }
}
