//! Summary Statistics
//!
//! Computes the descriptive statistics shown on each component card.
//! Values are stored unrounded so downstream math (standard deviation,
//! comparisons against the mean) never compounds rounding error; the
//! two-decimal display forms are separate formatting helpers.

use crate::StatsError;

/// Descriptive statistics for one score series
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStatistics {
    /// Arithmetic mean, unrounded
    pub mean: f64,
    /// Central value of the sorted series, unrounded
    pub median: f64,
    /// Population standard deviation (divides by N, not N-1)
    pub std_dev: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
    /// Number of values in the series
    pub sample_count: usize,
}

impl SummaryStatistics {
    /// Mean formatted to two decimals for display.
    pub fn mean_display(&self) -> String {
        format!("{:.2}", self.mean)
    }

    /// Median formatted to two decimals for display.
    pub fn median_display(&self) -> String {
        format!("{:.2}", self.median)
    }

    /// Standard deviation formatted to two decimals for display.
    pub fn std_dev_display(&self) -> String {
        format!("{:.2}", self.std_dev)
    }
}

/// Compute summary statistics over a non-empty series.
pub fn compute_summary(series: &[f64]) -> Result<SummaryStatistics, StatsError> {
    if series.is_empty() {
        return Err(StatsError::EmptySeries);
    }
    let n = series.len();

    let mean = series.iter().sum::<f64>() / n as f64;

    let mut sorted = series.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };

    // Population variance: the roster is the whole cohort, not a sample.
    let variance = series.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n as f64;
    let std_dev = variance.sqrt();

    let min = sorted[0];
    let max = sorted[n - 1];

    Ok(SummaryStatistics {
        mean,
        median,
        std_dev,
        min,
        max,
        sample_count: n,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_count_series() {
        let series = vec![70.0, 80.0, 90.0, 100.0];
        let stats = compute_summary(&series).unwrap();

        assert_eq!(stats.mean_display(), "85.00");
        assert_eq!(stats.median_display(), "85.00");
        assert!((stats.min - 70.0).abs() < f64::EPSILON);
        assert!((stats.max - 100.0).abs() < f64::EPSILON);
        assert_eq!(stats.sample_count, 4);
    }

    #[test]
    fn test_odd_count_median() {
        let series = vec![60.0, 75.0, 90.0];
        let stats = compute_summary(&series).unwrap();
        assert_eq!(stats.median_display(), "75.00");
    }

    #[test]
    fn test_median_sorts_a_copy() {
        // Median must sort ascending regardless of input order,
        // and must not reorder the caller's slice.
        let series = vec![90.0, 60.0, 75.0];
        let stats = compute_summary(&series).unwrap();
        assert!((stats.median - 75.0).abs() < f64::EPSILON);
        assert_eq!(series, vec![90.0, 60.0, 75.0]);
    }

    #[test]
    fn test_population_std_dev() {
        // Variance of [2, 4, 4, 4, 5, 5, 7, 9] is 4 with the /N convention.
        let series = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = compute_summary(&series).unwrap();
        assert!((stats.std_dev - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_zero_iff_constant() {
        let constant = vec![88.0, 88.0, 88.0];
        let stats = compute_summary(&constant).unwrap();
        assert!((stats.std_dev - 0.0).abs() < f64::EPSILON);

        let varied = vec![88.0, 88.0, 88.1];
        let stats = compute_summary(&varied).unwrap();
        assert!(stats.std_dev > 0.0);
    }

    #[test]
    fn test_bounds_ordering() {
        let series = vec![42.5, 17.0, 99.0, 63.25, 17.0];
        let stats = compute_summary(&series).unwrap();
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        assert!(stats.min <= stats.median && stats.median <= stats.max);
        assert!(stats.std_dev >= 0.0);
    }

    #[test]
    fn test_single_value() {
        let stats = compute_summary(&[73.0]).unwrap();
        assert!((stats.mean - 73.0).abs() < f64::EPSILON);
        assert!((stats.median - 73.0).abs() < f64::EPSILON);
        assert!((stats.std_dev - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_series_is_an_error() {
        assert!(matches!(compute_summary(&[]), Err(StatsError::EmptySeries)));
    }

    #[test]
    fn test_idempotent() {
        let series = vec![50.0, 55.0, 60.0, 40.0];
        let first = compute_summary(&series).unwrap();
        let second = compute_summary(&series).unwrap();
        assert_eq!(first, second);
    }
}
