//! Grade Classification
//!
//! Maps a final score to a letter grade. Classification is a pure, total
//! function over the real line: every score falls into exactly one band,
//! with each band inclusive on its lower bound.

use serde::{Deserialize, Serialize};

/// Letter grade derived from a final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// score >= a_min (default 85)
    A,
    /// b_min <= score < a_min (default 70..85)
    B,
    /// c_min <= score < b_min (default 55..70)
    C,
    /// d_min <= score < c_min (default 40..55)
    D,
    /// score < d_min (default below 40)
    E,
}

impl Grade {
    /// Classify a score using the default band thresholds.
    pub fn classify(score: f64) -> Grade {
        GradeBands::default().classify(score)
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
            Grade::E => write!(f, "E"),
        }
    }
}

/// Lower-bound thresholds for the A..D bands.
///
/// Scores below `d_min` classify as E. Thresholds are configuration, not
/// constants baked into the classifier: grading scales vary by course and
/// institution, so callers construct their own bands where the defaults
/// (85/70/55/40) don't apply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeBands {
    /// Minimum score for an A
    pub a_min: f64,
    /// Minimum score for a B
    pub b_min: f64,
    /// Minimum score for a C
    pub c_min: f64,
    /// Minimum score for a D
    pub d_min: f64,
}

impl Default for GradeBands {
    fn default() -> Self {
        Self {
            a_min: 85.0,
            b_min: 70.0,
            c_min: 55.0,
            d_min: 40.0,
        }
    }
}

impl GradeBands {
    /// Construct custom bands, rejecting thresholds that are not strictly
    /// descending (which would create gaps or overlaps in the partition).
    pub fn new(a_min: f64, b_min: f64, c_min: f64, d_min: f64) -> Result<Self, GradeBandsError> {
        if !(a_min > b_min && b_min > c_min && c_min > d_min) {
            return Err(GradeBandsError::Unordered);
        }
        Ok(Self {
            a_min,
            b_min,
            c_min,
            d_min,
        })
    }

    /// Map a final score to a letter grade.
    ///
    /// Total over all finite scores: values below 0 or above 100 are
    /// classified by the same rule, no range validation.
    pub fn classify(&self, score: f64) -> Grade {
        if score >= self.a_min {
            Grade::A
        } else if score >= self.b_min {
            Grade::B
        } else if score >= self.c_min {
            Grade::C
        } else if score >= self.d_min {
            Grade::D
        } else {
            Grade::E
        }
    }
}

/// Errors from grade band construction
#[derive(Debug, Clone, thiserror::Error)]
pub enum GradeBandsError {
    /// Thresholds must satisfy a_min > b_min > c_min > d_min
    #[error("Band thresholds must be strictly descending")]
    Unordered,
}
