//! Repository for the `student_marks` table.

use sqlx::PgPool;

use acadex_core::types::DbId;

use crate::models::mark::{MarkWithContext, StudentMark, UpsertMark};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, exam_id, student_id, subject_id, marks_obtained, max_marks, created_at";

/// Provides operations for per-exam student marks.
pub struct MarkRepo;

impl MarkRepo {
    /// Upsert a batch of marks for one exam inside a single transaction.
    ///
    /// Re-entering a (student, subject) pair for the exam overwrites the
    /// previous score via the `uq_student_marks_exam_student_subject` key.
    pub async fn upsert_for_exam(
        pool: &PgPool,
        exam_id: DbId,
        marks: &[UpsertMark],
    ) -> Result<Vec<StudentMark>, sqlx::Error> {
        let query = format!(
            "INSERT INTO student_marks (exam_id, student_id, subject_id, marks_obtained, max_marks) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT ON CONSTRAINT uq_student_marks_exam_student_subject \
             DO UPDATE SET marks_obtained = EXCLUDED.marks_obtained, \
                           max_marks = EXCLUDED.max_marks \
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let mut rows = Vec::with_capacity(marks.len());
        for mark in marks {
            let row = sqlx::query_as::<_, StudentMark>(&query)
                .bind(exam_id)
                .bind(mark.student_id)
                .bind(mark.subject_id)
                .bind(mark.marks_obtained)
                .bind(mark.max_marks)
                .fetch_one(&mut *tx)
                .await?;
            rows.push(row);
        }
        tx.commit().await?;
        Ok(rows)
    }

    /// List all marks recorded for an exam.
    pub async fn list_by_exam(pool: &PgPool, exam_id: DbId) -> Result<Vec<StudentMark>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM student_marks \
             WHERE exam_id = $1 \
             ORDER BY student_id, subject_id"
        );
        sqlx::query_as::<_, StudentMark>(&query)
            .bind(exam_id)
            .fetch_all(pool)
            .await
    }

    /// List an exam's marks restricted to the given student ids.
    pub async fn list_for_exam_students(
        pool: &PgPool,
        exam_id: DbId,
        student_ids: &[DbId],
    ) -> Result<Vec<StudentMark>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM student_marks \
             WHERE exam_id = $1 AND student_id = ANY($2)"
        );
        sqlx::query_as::<_, StudentMark>(&query)
            .bind(exam_id)
            .bind(student_ids)
            .fetch_all(pool)
            .await
    }

    /// All of one student's marks across every exam.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<StudentMark>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM student_marks \
             WHERE student_id = $1 \
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, StudentMark>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }

    /// One student's marks joined with exam and subject context, oldest
    /// first (report ordering).
    pub async fn list_with_context(
        pool: &PgPool,
        student_id: DbId,
    ) -> Result<Vec<MarkWithContext>, sqlx::Error> {
        let query = "SELECT m.id, m.marks_obtained, m.max_marks, m.created_at, \
                             e.id AS exam_id, e.name AS exam_name, e.date AS exam_date, \
                             s.id AS subject_id, s.name AS subject_name \
                      FROM student_marks m \
                      JOIN exams e ON e.id = m.exam_id \
                      JOIN subjects s ON s.id = m.subject_id \
                      WHERE m.student_id = $1 \
                      ORDER BY m.created_at ASC";
        sqlx::query_as::<_, MarkWithContext>(query)
            .bind(student_id)
            .fetch_all(pool)
            .await
    }
}
