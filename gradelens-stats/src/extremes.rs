//! Best/Worst Component Selection
//!
//! Reduces a list of (component, mean) pairs to the single best or worst
//! performer. The tie-break is observable behavior: when two means are
//! exactly equal, the earlier entry wins, so callers must supply the pairs
//! in the canonical component order.

use crate::StatsError;

/// Select the component with the highest (`select_max`) or lowest mean.
///
/// Strict comparison keeps the first-encountered entry on exact ties.
pub fn extreme_component<K: Copy>(
    means: &[(K, f64)],
    select_max: bool,
) -> Result<K, StatsError> {
    let mut iter = means.iter();
    let first = iter.next().ok_or(StatsError::EmptySeries)?;

    let (best, _) = iter.fold(*first, |(best_key, best_mean), &(key, mean)| {
        let replace = if select_max {
            mean > best_mean
        } else {
            mean < best_mean
        };
        if replace {
            (key, mean)
        } else {
            (best_key, best_mean)
        }
    });
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highest_and_lowest() {
        let means = [("Quiz", 72.0), ("Assignment", 81.5), ("Midterm", 64.0), ("Final Exam", 70.0)];
        assert_eq!(extreme_component(&means, true).unwrap(), "Assignment");
        assert_eq!(extreme_component(&means, false).unwrap(), "Midterm");
    }

    #[test]
    fn test_tie_break_keeps_first() {
        let means = [("Quiz", 70.0), ("Assignment", 70.0), ("Midterm", 60.0), ("Final Exam", 50.0)];
        assert_eq!(extreme_component(&means, true).unwrap(), "Quiz");

        let means = [("Quiz", 50.0), ("Assignment", 60.0), ("Midterm", 50.0), ("Final Exam", 70.0)];
        assert_eq!(extreme_component(&means, false).unwrap(), "Quiz");
    }

    #[test]
    fn test_single_entry() {
        let means = [("Quiz", 70.0)];
        assert_eq!(extreme_component(&means, true).unwrap(), "Quiz");
        assert_eq!(extreme_component(&means, false).unwrap(), "Quiz");
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let means: [(&str, f64); 0] = [];
        assert!(matches!(
            extreme_component(&means, true),
            Err(StatsError::EmptySeries)
        ));
    }
}
