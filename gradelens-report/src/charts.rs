//! Chart Data Preparation
//!
//! Produces the series/category pairs the dashboard charts plot. The chart
//! library itself is an external collaborator; these functions only shape
//! the data.

use gradelens_core::{Component, Roster};
use serde::{Deserialize, Serialize};

use crate::report::ReportError;

/// One named data series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Series name shown in the legend
    pub name: String,
    /// Data points, aligned to the categories
    pub data: Vec<f64>,
}

/// Series plus x-axis categories for one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Data series, one per plotted line/bar/trace
    pub series: Vec<ChartSeries>,
    /// X-axis category labels
    pub categories: Vec<String>,
}

/// Line chart: final score per student, categories are the identifiers.
pub fn final_score_trend(roster: &Roster) -> ChartData {
    ChartData {
        series: vec![ChartSeries {
            name: Component::FinalScore.label().to_owned(),
            data: roster.series(Component::FinalScore).to_vec(),
        }],
        categories: roster.nims().to_vec(),
    }
}

/// Stacked bar chart: the four raw components per student.
pub fn component_distribution(roster: &Roster) -> ChartData {
    ChartData {
        series: Component::RAW
            .iter()
            .map(|&component| ChartSeries {
                name: component.label().to_owned(),
                data: roster.series(component).to_vec(),
            })
            .collect(),
        categories: roster.nims().to_vec(),
    }
}

/// Radar chart: one student's five scores over the component labels.
pub fn student_radar(roster: &Roster, index: usize) -> Result<ChartData, ReportError> {
    let student = roster
        .student(index)
        .ok_or(ReportError::StudentOutOfRange {
            index,
            len: roster.len(),
        })?;

    Ok(ChartData {
        series: vec![ChartSeries {
            name: student.nim.to_owned(),
            data: Component::ALL.iter().map(|&c| student.score(c)).collect(),
        }],
        categories: Component::ALL.iter().map(|c| c.label().to_owned()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Roster {
        Roster::new(
            vec!["S001".into(), "S002".into()],
            vec![70.0, 80.0],
            vec![75.0, 85.0],
            vec![60.0, 70.0],
            vec![65.0, 75.0],
            vec![67.5, 77.5],
        )
        .unwrap()
    }

    #[test]
    fn test_final_score_trend() {
        let chart = final_score_trend(&sample_roster());
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].name, "Final Score");
        assert_eq!(chart.series[0].data, vec![67.5, 77.5]);
        assert_eq!(chart.categories, vec!["S001", "S002"]);
    }

    #[test]
    fn test_component_distribution() {
        let chart = component_distribution(&sample_roster());
        let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Quiz", "Assignment", "Midterm", "Final Exam"]);
        assert_eq!(chart.series[2].data, vec![60.0, 70.0]);
        assert_eq!(chart.categories.len(), 2);
    }

    #[test]
    fn test_student_radar() {
        let chart = student_radar(&sample_roster(), 1).unwrap();
        assert_eq!(chart.series[0].name, "S002");
        assert_eq!(chart.series[0].data, vec![80.0, 85.0, 70.0, 75.0, 77.5]);
        assert_eq!(
            chart.categories,
            vec!["Quiz", "Assignment", "Midterm", "Final Exam", "Final Score"]
        );
    }

    #[test]
    fn test_student_radar_out_of_range() {
        assert!(student_radar(&sample_roster(), 5).is_err());
    }
}
