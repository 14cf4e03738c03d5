//! Repository for the `attendance` table.

use chrono::NaiveDate;
use sqlx::PgPool;

use acadex_core::types::DbId;

use crate::models::attendance::{AttendanceEntry, AttendanceRecord};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, class_id, student_id, date, status, marked_by, created_at";

/// Provides operations for attendance records.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Upsert a class's attendance for one date inside a single transaction.
    ///
    /// Re-marking a student for the same day updates the existing row via
    /// the `uq_attendance_class_student_date` key.
    pub async fn record_for_class(
        pool: &PgPool,
        class_id: DbId,
        date: NaiveDate,
        marked_by: DbId,
        entries: &[AttendanceEntry],
    ) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance (class_id, student_id, date, status, marked_by) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT ON CONSTRAINT uq_attendance_class_student_date \
             DO UPDATE SET status = EXCLUDED.status, marked_by = EXCLUDED.marked_by \
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let mut rows = Vec::with_capacity(entries.len());
        for entry in entries {
            let row = sqlx::query_as::<_, AttendanceRecord>(&query)
                .bind(class_id)
                .bind(entry.student_id)
                .bind(date)
                .bind(&entry.status)
                .bind(marked_by)
                .fetch_one(&mut *tx)
                .await?;
            rows.push(row);
        }
        tx.commit().await?;
        Ok(rows)
    }

    /// A class's attendance for one date.
    pub async fn list_for_class_date(
        pool: &PgPool,
        class_id: DbId,
        date: NaiveDate,
    ) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendance \
             WHERE class_id = $1 AND date = $2 \
             ORDER BY student_id"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(class_id)
            .bind(date)
            .fetch_all(pool)
            .await
    }

    /// A student's full attendance history, most recent day first.
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendance \
             WHERE student_id = $1 \
             ORDER BY date DESC"
        );
        sqlx::query_as::<_, AttendanceRecord>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// Every status value recorded for a student (dashboard input).
    pub async fn statuses_for_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar("SELECT status FROM attendance WHERE student_id = $1")
            .bind(student_id)
            .fetch_all(pool)
            .await
    }
}
