//! Pass-Rate Computation
//!
//! Counts how many values in a series meet a passing threshold. The result
//! carries raw counts; the two display roundings observed in the reference
//! output (one decimal place in narrative text, nearest integer on summary
//! cards) are deliberately kept as distinct helpers rather than unified,
//! since unifying them would change displayed output.

use crate::StatsError;

/// Pass/fail tally for one series against a threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassRate {
    /// Values meeting or exceeding the threshold
    pub passed: usize,
    /// Total number of values
    pub total: usize,
}

impl PassRate {
    /// Unrounded fraction of passing values (0.0 to 1.0).
    pub fn ratio(&self) -> f64 {
        self.passed as f64 / self.total as f64
    }

    /// Unrounded percentage (0.0 to 100.0).
    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }

    /// Percentage to one decimal place, e.g. "50.0" (narrative text policy).
    pub fn percent_1dp(&self) -> String {
        format!("{:.1}", self.percent())
    }

    /// Percentage rounded to the nearest integer (summary card policy).
    pub fn percent_rounded(&self) -> u32 {
        self.percent().round() as u32
    }
}

/// Count values >= `threshold` in a non-empty series.
pub fn pass_rate(series: &[f64], threshold: f64) -> Result<PassRate, StatsError> {
    if series.is_empty() {
        return Err(StatsError::EmptySeries);
    }
    let passed = series.iter().filter(|&&v| v >= threshold).count();
    Ok(PassRate {
        passed,
        total: series.len(),
    })
}
