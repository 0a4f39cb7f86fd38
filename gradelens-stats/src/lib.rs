#![warn(missing_docs)]
//! GradeLens Statistical Engine
//!
//! Descriptive statistics for grade component series:
//! - Summary statistics (mean, median, min, max, population standard deviation)
//! - Pass-rate computation against a configurable threshold
//! - Best/worst component selection with a stable first-wins tie-break
//!
//! All values are kept unrounded; rounding to a display precision is a
//! caller policy applied through the provided formatting helpers.

mod extremes;
mod passrate;
mod summary;

pub use extremes::extreme_component;
pub use passrate::{PassRate, pass_rate};
pub use summary::{SummaryStatistics, compute_summary};

/// Default minimum passing score.
///
/// The reference grading scheme treats 55 as the pass cutoff, but the
/// threshold is always passed as an argument so callers can vary it.
pub const DEFAULT_PASS_THRESHOLD: f64 = 55.0;

/// Errors from statistics operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum StatsError {
    /// Statistics over a zero-length series are undefined
    #[error("Series must contain at least one value")]
    EmptySeries,
}
