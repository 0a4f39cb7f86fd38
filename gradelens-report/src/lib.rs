#![warn(missing_docs)]
//! GradeLens Report - Structured Dashboard Data
//!
//! Assembles the computed statistics into the structures behind a class
//! dashboard:
//! - Class overview and per-component summary cards
//! - Final-score trend analysis (narrative numbers)
//! - Grade table rows with letter classification
//! - Per-student comparison against class averages
//! - Chart series/categories for line, stacked bar, and radar charts
//! - JSON (machine-readable) output
//!
//! Rendering is out of scope: everything here is plain data for a
//! presentation layer to format.

mod charts;
mod json;
mod report;

pub use charts::{ChartData, ChartSeries, component_distribution, final_score_trend, student_radar};
pub use json::generate_json_report;
pub use report::{
    ClassOverview, ComparisonEntry, ComponentCard, ComponentStanding, GradeRow, Report,
    ReportError, ReportMeta, StudentComparison, TrendAnalysis, build_report, student_comparison,
};

/// Version of the JSON report schema
pub const SCHEMA_VERSION: u32 = 1;
