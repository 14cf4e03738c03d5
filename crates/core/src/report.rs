//! Aggregate statistics for a student's report.

use serde::Serialize;

use crate::stats::average_marks;

/// Summary line of a student report: overall average and mark totals.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReportStatistics {
    /// Weighted average percentage across all tests, one decimal place.
    pub average_percentage: f64,
    pub total_tests: usize,
    pub total_obtained: f64,
    pub total_max: f64,
}

/// Fold a student's (obtained, max) mark pairs into report statistics.
pub fn report_statistics(marks: &[(f64, f64)]) -> ReportStatistics {
    let total_obtained: f64 = marks.iter().map(|(o, _)| o).sum();
    let total_max: f64 = marks.iter().map(|(_, m)| m).sum();

    ReportStatistics {
        average_percentage: average_marks(marks),
        total_tests: marks.len(),
        total_obtained,
        total_max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_and_average() {
        let stats = report_statistics(&[(80.0, 100.0), (45.0, 50.0)]);
        assert_eq!(stats.total_tests, 2);
        assert_eq!(stats.total_obtained, 125.0);
        assert_eq!(stats.total_max, 150.0);
        assert_eq!(stats.average_percentage, 83.3);
    }

    #[test]
    fn no_marks_yields_zeroes() {
        let stats = report_statistics(&[]);
        assert_eq!(stats.total_tests, 0);
        assert_eq!(stats.average_percentage, 0.0);
    }
}
