//! Report Data Structures and Assembly

use chrono::{DateTime, Utc};
use gradelens_core::{Component, Grade, GradeBands, Roster};
use gradelens_stats::{StatsError, compute_summary, extreme_component, pass_rate};
use serde::{Deserialize, Serialize};

/// Complete class dashboard report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report metadata
    pub meta: ReportMeta,
    /// Headline numbers for the whole class
    pub overview: ClassOverview,
    /// Final-score trend narrative numbers
    pub trend: TrendAnalysis,
    /// One summary card per component, final score last
    pub cards: Vec<ComponentCard>,
    /// One grade-table row per student, in roster order
    pub rows: Vec<GradeRow>,
    /// Raw component with the highest mean
    pub best_component: Component,
    /// Raw component with the lowest mean
    pub worst_component: Component,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Schema version of the JSON output
    pub schema_version: u32,
    /// When the report was assembled
    pub generated_at: DateTime<Utc>,
}

/// Headline numbers for the whole class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassOverview {
    /// Number of students in the roster
    pub total_students: usize,
    /// Mean of the final-score series, unrounded
    pub class_average: f64,
}

/// Narrative numbers describing the final-score series.
///
/// `pass_rate_display` uses the one-decimal policy ("50.0"), matching the
/// narrative text call site; summary cards round to the nearest integer
/// instead. The two policies are intentionally kept separate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Mean final score, unrounded
    pub average: f64,
    /// Highest final score
    pub highest: f64,
    /// Lowest final score
    pub lowest: f64,
    /// Students meeting the pass threshold
    pub pass_count: usize,
    /// Total students
    pub total: usize,
    /// Pass percentage to one decimal place
    pub pass_rate_display: String,
}

/// Summary card for one component
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentCard {
    /// Which component this card describes
    pub component: Component,
    /// Mean score, unrounded
    pub mean: f64,
    /// Central value of the sorted series, unrounded
    pub median: f64,
    /// Population standard deviation
    pub std_dev: f64,
    /// Lowest score
    pub min: f64,
    /// Highest score
    pub max: f64,
    /// Pass percentage rounded to the nearest integer
    pub pass_rate_pct: u32,
}

/// One row of the student grade table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRow {
    /// Student identifier
    pub nim: String,
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
    /// Letter grade for the final score
    pub grade: Grade,
}

/// Whether a student's score sits at-or-above or below the class mean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStanding {
    /// Score >= class mean
    Above,
    /// Score < class mean
    Below,
}

/// One component of a student-vs-class comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonEntry {
    /// Which component is compared
    pub component: Component,
    /// The student's score
    pub score: f64,
    /// Class mean for the component, unrounded
    pub class_mean: f64,
    /// Above or below the class mean
    pub standing: ComponentStanding,
}

/// A student's scores compared against class averages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentComparison {
    /// Student identifier
    pub nim: String,
    /// The student's final score
    pub final_score: f64,
    /// One entry per raw component, in canonical order
    pub entries: Vec<ComparisonEntry>,
}

/// Errors from report assembly
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReportError {
    /// A statistics operation failed
    #[error(transparent)]
    Stats(#[from] StatsError),
    /// A student index past the end of the roster
    #[error("Student index {index} out of range for roster of {len}")]
    StudentOutOfRange {
        /// Requested index
        index: usize,
        /// Roster size
        len: usize,
    },
}

/// Assemble the full dashboard report for one roster.
pub fn build_report(
    roster: &Roster,
    pass_threshold: f64,
    bands: &GradeBands,
) -> Result<Report, ReportError> {
    let final_scores = roster.series(Component::FinalScore);
    let final_stats = compute_summary(final_scores)?;
    let final_rate = pass_rate(final_scores, pass_threshold)?;

    let overview = ClassOverview {
        total_students: roster.len(),
        class_average: final_stats.mean,
    };

    let trend = TrendAnalysis {
        average: final_stats.mean,
        highest: final_stats.max,
        lowest: final_stats.min,
        pass_count: final_rate.passed,
        total: final_rate.total,
        pass_rate_display: final_rate.percent_1dp(),
    };

    let mut cards = Vec::with_capacity(Component::ALL.len());
    for component in Component::ALL {
        let series = roster.series(component);
        let stats = compute_summary(series)?;
        let rate = pass_rate(series, pass_threshold)?;
        cards.push(ComponentCard {
            component,
            mean: stats.mean,
            median: stats.median,
            std_dev: stats.std_dev,
            min: stats.min,
            max: stats.max,
            pass_rate_pct: rate.percent_rounded(),
        });
    }

    let rows = roster
        .students()
        .map(|s| GradeRow {
            nim: s.nim.to_owned(),
            quiz: s.quiz,
            assignment: s.assignment,
            midterm: s.midterm,
            final_exam: s.final_exam,
            final_score: s.final_score,
            grade: bands.classify(s.final_score),
        })
        .collect();

    let means = raw_component_means(roster)?;
    let best_component = extreme_component(&means, true)?;
    let worst_component = extreme_component(&means, false)?;

    Ok(Report {
        meta: ReportMeta {
            schema_version: crate::SCHEMA_VERSION,
            generated_at: Utc::now(),
        },
        overview,
        trend,
        cards,
        rows,
        best_component,
        worst_component,
    })
}

/// Compare one student against the class means of the raw components.
pub fn student_comparison(
    roster: &Roster,
    index: usize,
) -> Result<StudentComparison, ReportError> {
    let student = roster
        .student(index)
        .ok_or(ReportError::StudentOutOfRange {
            index,
            len: roster.len(),
        })?;

    let mut entries = Vec::with_capacity(Component::RAW.len());
    for component in Component::RAW {
        let class_mean = compute_summary(roster.series(component))?.mean;
        let score = student.score(component);
        let standing = if score >= class_mean {
            ComponentStanding::Above
        } else {
            ComponentStanding::Below
        };
        entries.push(ComparisonEntry {
            component,
            score,
            class_mean,
            standing,
        });
    }

    Ok(StudentComparison {
        nim: student.nim.to_owned(),
        final_score: student.final_score,
        entries,
    })
}

/// Means of the four raw components, in canonical tie-break order.
pub(crate) fn raw_component_means(roster: &Roster) -> Result<Vec<(Component, f64)>, ReportError> {
    Component::RAW
        .iter()
        .map(|&component| {
            let stats = compute_summary(roster.series(component))?;
            Ok((component, stats.mean))
        })
        .collect()
}
