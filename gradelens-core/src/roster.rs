//! Roster Data Model
//!
//! A `Roster` holds one class cohort: a unique identifier per student plus
//! five index-aligned score series. Alignment invariants are enforced once
//! at construction so every downstream computation can assume equal-length,
//! non-empty slices.

use serde::{Deserialize, Serialize};

/// One of the five grade components tracked per student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    /// Quiz scores
    Quiz,
    /// Assignment scores
    Assignment,
    /// Midterm exam scores
    Midterm,
    /// Final exam scores
    FinalExam,
    /// Derived overall score
    FinalScore,
}

impl Component {
    /// The four raw input components, in canonical order.
    ///
    /// This order is observable: extreme-component selection breaks ties by
    /// first occurrence, and reports iterate components in this order.
    pub const RAW: [Component; 4] = [
        Component::Quiz,
        Component::Assignment,
        Component::Midterm,
        Component::FinalExam,
    ];

    /// All five components, raw inputs first, derived final score last.
    pub const ALL: [Component; 5] = [
        Component::Quiz,
        Component::Assignment,
        Component::Midterm,
        Component::FinalExam,
        Component::FinalScore,
    ];

    /// Human-readable label used in reports and chart categories.
    pub fn label(self) -> &'static str {
        match self {
            Component::Quiz => "Quiz",
            Component::Assignment => "Assignment",
            Component::Midterm => "Midterm",
            Component::FinalExam => "Final Exam",
            Component::FinalScore => "Final Score",
        }
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated class roster with index-aligned score series.
///
/// Invariants (checked by [`Roster::new`]):
/// - at least one student
/// - every score series has exactly one value per student
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    nim: Vec<String>,
    quiz: Vec<f64>,
    assignment: Vec<f64>,
    midterm: Vec<f64>,
    final_exam: Vec<f64>,
    final_score: Vec<f64>,
}

impl Roster {
    /// Build a roster from parallel arrays, validating alignment.
    pub fn new(
        nim: Vec<String>,
        quiz: Vec<f64>,
        assignment: Vec<f64>,
        midterm: Vec<f64>,
        final_exam: Vec<f64>,
        final_score: Vec<f64>,
    ) -> Result<Self, RosterError> {
        let expected = nim.len();
        if expected == 0 {
            return Err(RosterError::Empty);
        }
        for (component, series) in [
            (Component::Quiz, &quiz),
            (Component::Assignment, &assignment),
            (Component::Midterm, &midterm),
            (Component::FinalExam, &final_exam),
            (Component::FinalScore, &final_score),
        ] {
            if series.len() != expected {
                return Err(RosterError::LengthMismatch {
                    component,
                    expected,
                    actual: series.len(),
                });
            }
        }
        Ok(Self {
            nim,
            quiz,
            assignment,
            midterm,
            final_exam,
            final_score,
        })
    }

    /// Number of students in the roster (always >= 1).
    pub fn len(&self) -> usize {
        self.nim.len()
    }

    /// A validated roster is never empty; provided for slice-like symmetry.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Student identifiers, in roster order.
    pub fn nims(&self) -> &[String] {
        &self.nim
    }

    /// The score series for one component, aligned to [`Roster::nims`].
    pub fn series(&self, component: Component) -> &[f64] {
        match component {
            Component::Quiz => &self.quiz,
            Component::Assignment => &self.assignment,
            Component::Midterm => &self.midterm,
            Component::FinalExam => &self.final_exam,
            Component::FinalScore => &self.final_score,
        }
    }

    /// One student's record by ordinal index, or `None` past the end.
    pub fn student(&self, index: usize) -> Option<StudentRecord<'_>> {
        if index >= self.len() {
            return None;
        }
        Some(StudentRecord {
            nim: &self.nim[index],
            quiz: self.quiz[index],
            assignment: self.assignment[index],
            midterm: self.midterm[index],
            final_exam: self.final_exam[index],
            final_score: self.final_score[index],
        })
    }

    /// Iterate all student records in roster order.
    pub fn students(&self) -> impl Iterator<Item = StudentRecord<'_>> {
        (0..self.len()).filter_map(|i| self.student(i))
    }
}

/// Borrowed view of one student's scores
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentRecord<'a> {
    /// Unique student identifier
    pub nim: &'a str,
    /// Quiz score
    pub quiz: f64,
    /// Assignment score
    pub assignment: f64,
    /// Midterm exam score
    pub midterm: f64,
    /// Final exam score
    pub final_exam: f64,
    /// Overall final score
    pub final_score: f64,
}

impl StudentRecord<'_> {
    /// Score for one component.
    pub fn score(&self, component: Component) -> f64 {
        match component {
            Component::Quiz => self.quiz,
            Component::Assignment => self.assignment,
            Component::Midterm => self.midterm,
            Component::FinalExam => self.final_exam,
            Component::FinalScore => self.final_score,
        }
    }
}

/// Errors from roster construction
#[derive(Debug, Clone, thiserror::Error)]
pub enum RosterError {
    /// Statistics over an empty roster are undefined
    #[error("Roster must contain at least one student")]
    Empty,
    /// A score series is not aligned with the identifier array
    #[error("{component} series has {actual} values, expected {expected}")]
    LengthMismatch {
        /// Which series is misaligned
        component: Component,
        /// Number of student identifiers
        expected: usize,
        /// Length of the offending series
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Roster {
        Roster::new(
            vec!["S001".into(), "S002".into(), "S003".into()],
            vec![70.0, 80.0, 90.0],
            vec![75.0, 85.0, 95.0],
            vec![60.0, 70.0, 80.0],
            vec![65.0, 75.0, 85.0],
            vec![67.5, 77.5, 87.5],
        )
        .unwrap()
    }

    #[test]
    fn test_roster_construction() {
        let roster = sample_roster();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.nims()[1], "S002");
        assert_eq!(roster.series(Component::Midterm), &[60.0, 70.0, 80.0]);
    }

    #[test]
    fn test_empty_roster_rejected() {
        let result = Roster::new(vec![], vec![], vec![], vec![], vec![], vec![]);
        assert!(matches!(result, Err(RosterError::Empty)));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let result = Roster::new(
            vec!["S001".into(), "S002".into()],
            vec![70.0, 80.0],
            vec![75.0],
            vec![60.0, 70.0],
            vec![65.0, 75.0],
            vec![67.5, 77.5],
        );
        match result {
            Err(RosterError::LengthMismatch {
                component,
                expected,
                actual,
            }) => {
                assert_eq!(component, Component::Assignment);
                assert_eq!(expected, 2);
                assert_eq!(actual, 1);
            }
            other => panic!("expected length mismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_student_record() {
        let roster = sample_roster();
        let student = roster.student(2).unwrap();
        assert_eq!(student.nim, "S003");
        assert!((student.score(Component::FinalScore) - 87.5).abs() < f64::EPSILON);
        assert!(roster.student(3).is_none());
    }

    #[test]
    fn test_students_iterates_in_order() {
        let roster = sample_roster();
        let nims: Vec<&str> = roster.students().map(|s| s.nim).collect();
        assert_eq!(nims, vec!["S001", "S002", "S003"]);
    }

    #[test]
    fn test_raw_component_order() {
        // Tie-break and report ordering depend on this exact sequence.
        assert_eq!(
            Component::RAW,
            [
                Component::Quiz,
                Component::Assignment,
                Component::Midterm,
                Component::FinalExam
            ]
        );
        assert_eq!(Component::ALL[4], Component::FinalScore);
    }
}
