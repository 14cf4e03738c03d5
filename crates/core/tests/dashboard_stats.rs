//! Dashboard statistics scenarios driven through an in-memory store fake.

use assert_matches::assert_matches;
use async_trait::async_trait;

use acadex_core::error::CoreError;
use acadex_core::stats::{AttendanceStatus, DashboardStatsService, DashboardStore};
use acadex_core::types::DbId;

#[derive(Default)]
struct FakeStore {
    statuses: Vec<AttendanceStatus>,
    class_id: Option<DbId>,
    subject_count: i64,
    mark_totals: Vec<(f64, f64)>,
    fail_attendance: bool,
    fail_marks: bool,
}

#[async_trait]
impl DashboardStore for FakeStore {
    async fn attendance_statuses(
        &self,
        _student_id: DbId,
    ) -> Result<Vec<AttendanceStatus>, CoreError> {
        if self.fail_attendance {
            return Err(CoreError::Internal("attendance query failed".into()));
        }
        Ok(self.statuses.clone())
    }

    async fn student_class(&self, _student_id: DbId) -> Result<Option<DbId>, CoreError> {
        Ok(self.class_id)
    }

    async fn subject_count(&self, _class_id: DbId) -> Result<i64, CoreError> {
        Ok(self.subject_count)
    }

    async fn mark_totals(&self, _student_id: DbId) -> Result<Vec<(f64, f64)>, CoreError> {
        if self.fail_marks {
            return Err(CoreError::Internal("marks query failed".into()));
        }
        Ok(self.mark_totals.clone())
    }
}

fn statuses(present: usize, absent: usize) -> Vec<AttendanceStatus> {
    let mut v = vec![AttendanceStatus::Present; present];
    v.extend(vec![AttendanceStatus::Absent; absent]);
    v
}

#[tokio::test]
async fn collect_computes_all_three_stats() {
    let store = FakeStore {
        statuses: statuses(7, 3),
        class_id: Some(4),
        subject_count: 5,
        mark_totals: vec![(80.0, 100.0), (45.0, 50.0)],
        ..FakeStore::default()
    };

    let report = DashboardStatsService::new(&store).collect(1).await;

    assert!(report.failures.is_empty());
    assert_eq!(report.stats.attendance_percent, Some(70));
    assert_eq!(report.stats.courses_count, Some(5));
    assert_eq!(report.stats.average_marks, Some(83.3));
}

#[tokio::test]
async fn student_without_class_has_zero_courses() {
    let store = FakeStore {
        class_id: None,
        subject_count: 5,
        ..FakeStore::default()
    };

    let count = DashboardStatsService::new(&store).courses_count(1).await;
    assert_eq!(count.unwrap(), 0);
}

#[tokio::test]
async fn no_data_reads_as_zero_not_failure() {
    let store = FakeStore::default();

    let report = DashboardStatsService::new(&store).collect(1).await;

    assert!(report.failures.is_empty());
    assert_eq!(report.stats.attendance_percent, Some(0));
    assert_eq!(report.stats.courses_count, Some(0));
    assert_eq!(report.stats.average_marks, Some(0.0));
}

#[tokio::test]
async fn one_failed_fetch_does_not_block_the_others() {
    let store = FakeStore {
        statuses: statuses(1, 0),
        class_id: Some(4),
        subject_count: 3,
        mark_totals: vec![(10.0, 20.0)],
        fail_marks: true,
        ..FakeStore::default()
    };

    let report = DashboardStatsService::new(&store).collect(1).await;

    assert_eq!(report.stats.attendance_percent, Some(100));
    assert_eq!(report.stats.courses_count, Some(3));
    assert_eq!(report.stats.average_marks, None);

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].stat, "average_marks");
    assert_matches!(report.failures[0].error, CoreError::Internal(_));
}

#[tokio::test]
async fn two_failures_are_both_reported() {
    let store = FakeStore {
        class_id: Some(4),
        subject_count: 2,
        fail_attendance: true,
        fail_marks: true,
        ..FakeStore::default()
    };

    let report = DashboardStatsService::new(&store).collect(1).await;

    assert_eq!(report.stats.courses_count, Some(2));
    assert_eq!(report.failures.len(), 2);

    let failed: Vec<&str> = report.failures.iter().map(|f| f.stat).collect();
    assert!(failed.contains(&"attendance_percent"));
    assert!(failed.contains(&"average_marks"));
}
