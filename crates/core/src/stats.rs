//! Student dashboard statistics.
//!
//! Three unrelated scalars for one student: attendance present-ratio,
//! subject count for their class, and marks-weighted average percentage.
//! Each is backed by its own fetch through [`DashboardStore`] and fails
//! independently, so one broken query never blanks the other two cards.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Attendance status of a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }

    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            other => Err(CoreError::Validation(format!(
                "Unknown attendance status: {other}"
            ))),
        }
    }
}

/// Present-count over total, as a whole percentage. 0 when no records.
pub fn attendance_percent(present: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (present as f64 / total as f64 * 100.0).round() as u32
}

/// Marks-weighted average percentage over (obtained, max) pairs, rounded
/// to one decimal place. 0 when there are no marks or the max sum is 0.
pub fn average_marks(totals: &[(f64, f64)]) -> f64 {
    let obtained: f64 = totals.iter().map(|(o, _)| o).sum();
    let max: f64 = totals.iter().map(|(_, m)| m).sum();
    if max <= 0.0 {
        return 0.0;
    }
    (obtained / max * 1000.0).round() / 10.0
}

/// The dashboard's three stats. `None` means that stat's fetch failed;
/// `Some(0)` means it genuinely has no data yet.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardStats {
    pub attendance_percent: Option<u32>,
    pub courses_count: Option<i64>,
    pub average_marks: Option<f64>,
}

/// A sub-computation that failed, named so the caller can log it.
#[derive(Debug)]
pub struct StatFailure {
    pub stat: &'static str,
    pub error: CoreError,
}

/// Result of [`DashboardStatsService::collect`]: whatever stats could be
/// computed, plus the failures for the ones that could not.
#[derive(Debug)]
pub struct DashboardStatsReport {
    pub stats: DashboardStats,
    pub failures: Vec<StatFailure>,
}

/// Read-only queries the dashboard stats need from the data layer.
#[async_trait]
pub trait DashboardStore: Send + Sync {
    /// Status of every attendance record for a student.
    async fn attendance_statuses(
        &self,
        student_id: DbId,
    ) -> Result<Vec<AttendanceStatus>, CoreError>;

    /// The class a student's profile is assigned to, if any.
    async fn student_class(&self, student_id: DbId) -> Result<Option<DbId>, CoreError>;

    /// Number of subjects taught in a class.
    async fn subject_count(&self, class_id: DbId) -> Result<i64, CoreError>;

    /// (obtained, max) for every mark a student has, across all exams.
    async fn mark_totals(&self, student_id: DbId) -> Result<Vec<(f64, f64)>, CoreError>;
}

/// Computes dashboard statistics over a [`DashboardStore`].
pub struct DashboardStatsService<'a, S> {
    store: &'a S,
}

impl<'a, S: DashboardStore> DashboardStatsService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn attendance_percent(&self, student_id: DbId) -> Result<u32, CoreError> {
        let statuses = self.store.attendance_statuses(student_id).await?;
        let present = statuses
            .iter()
            .filter(|s| **s == AttendanceStatus::Present)
            .count();
        Ok(attendance_percent(present, statuses.len()))
    }

    /// Subjects in the student's class; 0 when they have no class assigned.
    pub async fn courses_count(&self, student_id: DbId) -> Result<i64, CoreError> {
        match self.store.student_class(student_id).await? {
            Some(class_id) => self.store.subject_count(class_id).await,
            None => Ok(0),
        }
    }

    pub async fn average_marks(&self, student_id: DbId) -> Result<f64, CoreError> {
        let totals = self.store.mark_totals(student_id).await?;
        Ok(average_marks(&totals))
    }

    /// Run all three sub-computations concurrently. A failure in one is
    /// recorded and the others still complete.
    pub async fn collect(&self, student_id: DbId) -> DashboardStatsReport {
        let (attendance, courses, marks) = tokio::join!(
            self.attendance_percent(student_id),
            self.courses_count(student_id),
            self.average_marks(student_id)
        );

        let mut stats = DashboardStats::default();
        let mut failures = Vec::new();

        match attendance {
            Ok(v) => stats.attendance_percent = Some(v),
            Err(error) => failures.push(StatFailure {
                stat: "attendance_percent",
                error,
            }),
        }
        match courses {
            Ok(v) => stats.courses_count = Some(v),
            Err(error) => failures.push(StatFailure {
                stat: "courses_count",
                error,
            }),
        }
        match marks {
            Ok(v) => stats.average_marks = Some(v),
            Err(error) => failures.push(StatFailure {
                stat: "average_marks",
                error,
            }),
        }

        DashboardStatsReport { stats, failures }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attendance_seven_of_ten_is_seventy() {
        assert_eq!(attendance_percent(7, 10), 70);
    }

    #[test]
    fn attendance_rounds_to_nearest_integer() {
        // 2/3 = 66.66... -> 67
        assert_eq!(attendance_percent(2, 3), 67);
        // 1/3 = 33.33... -> 33
        assert_eq!(attendance_percent(1, 3), 33);
    }

    #[test]
    fn attendance_with_no_records_is_zero() {
        assert_eq!(attendance_percent(0, 0), 0);
    }

    #[test]
    fn attendance_full_presence_is_hundred() {
        assert_eq!(attendance_percent(5, 5), 100);
    }

    #[test]
    fn average_marks_rounds_to_one_decimal() {
        // 125/150 = 83.33... -> 83.3
        let avg = average_marks(&[(80.0, 100.0), (45.0, 50.0)]);
        assert_eq!(avg, 83.3);
    }

    #[test]
    fn average_marks_empty_is_zero() {
        assert_eq!(average_marks(&[]), 0.0);
    }

    #[test]
    fn average_marks_zero_max_is_zero() {
        assert_eq!(average_marks(&[(0.0, 0.0)]), 0.0);
    }

    #[test]
    fn average_marks_exact_percentage() {
        assert_eq!(average_marks(&[(90.0, 100.0)]), 90.0);
    }

    #[test]
    fn attendance_status_round_trips() {
        assert_eq!(
            AttendanceStatus::from_str("present").unwrap(),
            AttendanceStatus::Present
        );
        assert_eq!(AttendanceStatus::Absent.as_str(), "absent");
    }

    #[test]
    fn attendance_status_rejects_unknown() {
        assert!(AttendanceStatus::from_str("late").is_err());
    }
}
