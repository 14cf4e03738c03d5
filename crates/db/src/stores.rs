//! Postgres implementations of the core read-only store traits.
//!
//! Rows are converted into core types immediately after each fetch, so
//! nothing downstream handles raw rows. Query failures map to
//! `CoreError::Internal`; the services treat them as fetch failures, never
//! as absent data.

use async_trait::async_trait;
use sqlx::PgPool;

use acadex_core::error::CoreError;
use acadex_core::leaderboard::{ExamRef, LeaderboardStore, MarkScore, RosterEntry};
use acadex_core::stats::{AttendanceStatus, DashboardStore};
use acadex_core::types::DbId;

use crate::repositories::{
    AttendanceRepo, ClassRepo, ExamRepo, MarkRepo, ProfileRepo, SubjectRepo,
};

/// Read-only store over the connection pool, shared by the leaderboard and
/// dashboard services.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn fetch_failed(context: &str, err: sqlx::Error) -> CoreError {
    tracing::error!(error = %err, context, "Store query failed");
    CoreError::Internal(format!("{context}: {err}"))
}

#[async_trait]
impl LeaderboardStore for PgStore {
    async fn latest_exam(&self, class_id: DbId) -> Result<Option<ExamRef>, CoreError> {
        let exam = ExamRepo::latest_for_class(&self.pool, class_id)
            .await
            .map_err(|e| fetch_failed("latest exam lookup", e))?;
        Ok(exam.map(|e| ExamRef {
            id: e.id,
            name: e.name,
            date: e.date,
        }))
    }

    async fn class_title(&self, class_id: DbId) -> Result<Option<String>, CoreError> {
        let class = ClassRepo::find_by_id(&self.pool, class_id)
            .await
            .map_err(|e| fetch_failed("class lookup", e))?;
        Ok(class.map(|c| c.title))
    }

    async fn roster(&self, class_id: DbId) -> Result<Vec<RosterEntry>, CoreError> {
        let profiles = ProfileRepo::list_by_class(&self.pool, class_id)
            .await
            .map_err(|e| fetch_failed("class roster lookup", e))?;
        Ok(profiles
            .into_iter()
            .map(|p| RosterEntry {
                student_id: p.user_id,
                full_name: p.full_name.unwrap_or_else(|| "Unknown".to_string()),
            })
            .collect())
    }

    async fn exam_marks(
        &self,
        exam_id: DbId,
        student_ids: &[DbId],
    ) -> Result<Vec<MarkScore>, CoreError> {
        let marks = MarkRepo::list_for_exam_students(&self.pool, exam_id, student_ids)
            .await
            .map_err(|e| fetch_failed("exam marks lookup", e))?;
        Ok(marks
            .into_iter()
            .map(|m| MarkScore {
                student_id: m.student_id,
                marks_obtained: m.marks_obtained,
                max_marks: m.max_marks,
            })
            .collect())
    }
}

#[async_trait]
impl DashboardStore for PgStore {
    async fn attendance_statuses(
        &self,
        student_id: DbId,
    ) -> Result<Vec<AttendanceStatus>, CoreError> {
        let statuses = AttendanceRepo::statuses_for_student(&self.pool, student_id)
            .await
            .map_err(|e| fetch_failed("attendance lookup", e))?;
        statuses
            .iter()
            .map(|s| AttendanceStatus::from_str(s))
            .collect()
    }

    async fn student_class(&self, student_id: DbId) -> Result<Option<DbId>, CoreError> {
        let profile = ProfileRepo::find_by_user(&self.pool, student_id)
            .await
            .map_err(|e| fetch_failed("profile lookup", e))?;
        Ok(profile.and_then(|p| p.class_id))
    }

    async fn subject_count(&self, class_id: DbId) -> Result<i64, CoreError> {
        SubjectRepo::count_by_class(&self.pool, class_id)
            .await
            .map_err(|e| fetch_failed("subject count", e))
    }

    async fn mark_totals(&self, student_id: DbId) -> Result<Vec<(f64, f64)>, CoreError> {
        let marks = MarkRepo::list_by_student(&self.pool, student_id)
            .await
            .map_err(|e| fetch_failed("student marks lookup", e))?;
        Ok(marks
            .into_iter()
            .map(|m| (m.marks_obtained, m.max_marks))
            .collect())
    }
}
