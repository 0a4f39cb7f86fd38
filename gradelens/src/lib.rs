#![warn(missing_docs)]
//! # GradeLens
//!
//! Statistics and grade classification core for class dashboards.
//!
//! GradeLens takes a validated roster of student scores and computes the
//! structured data a dashboard renders:
//! - **Summary statistics**: mean, median, min, max, population standard
//!   deviation per component, unrounded with display-rounding helpers
//! - **Pass rates**: configurable threshold, both observed display policies
//!   (one-decimal narrative, nearest-integer cards) exposed to callers
//! - **Letter grades**: A-E classification via configurable band thresholds
//! - **Best/worst component**: stable first-wins tie-break over the
//!   canonical component order
//! - **Report assembly**: summary cards, grade-table rows, trend numbers,
//!   per-student comparisons, chart series, and JSON output
//!
//! ## Quick Start
//!
//! ```
//! use gradelens::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let roster = Roster::new(
//!     vec!["S001".into(), "S002".into()],
//!     vec![70.0, 80.0],   // quiz
//!     vec![75.0, 85.0],   // assignment
//!     vec![60.0, 70.0],   // midterm
//!     vec![65.0, 75.0],   // final exam
//!     vec![67.5, 77.5],   // final score
//! )?;
//!
//! let report = build_report(&roster, DEFAULT_PASS_THRESHOLD, &GradeBands::default())?;
//! assert_eq!(report.overview.total_students, 2);
//! # Ok(())
//! # }
//! ```

// Re-export the data model and classifier
pub use gradelens_core::{
    Component, Grade, GradeBands, GradeBandsError, Roster, RosterError, StudentRecord,
};

// Re-export the statistics engine
pub use gradelens_stats::{
    DEFAULT_PASS_THRESHOLD, PassRate, StatsError, SummaryStatistics, compute_summary,
    extreme_component, pass_rate,
};

// Re-export report assembly
pub use gradelens_report::{
    ChartData, ChartSeries, ClassOverview, ComparisonEntry, ComponentCard, ComponentStanding,
    GradeRow, Report, ReportError, ReportMeta, SCHEMA_VERSION, StudentComparison, TrendAnalysis,
    build_report, component_distribution, final_score_trend, generate_json_report,
    student_comparison, student_radar,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Component, DEFAULT_PASS_THRESHOLD, Grade, GradeBands, Roster, build_report,
        compute_summary, generate_json_report, pass_rate,
    };
}
