//! Student mark entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use acadex_core::types::{DbId, Timestamp};

/// A row from the `student_marks` table.
///
/// At most one row exists per (exam, student, subject); the unique
/// constraint `uq_student_marks_exam_student_subject` enforces it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentMark {
    pub id: DbId,
    pub exam_id: DbId,
    pub student_id: DbId,
    pub subject_id: DbId,
    pub marks_obtained: f64,
    pub max_marks: f64,
    pub created_at: Timestamp,
}

/// Mark row joined with its exam and subject, for report views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MarkWithContext {
    pub id: DbId,
    pub marks_obtained: f64,
    pub max_marks: f64,
    pub created_at: Timestamp,
    pub exam_id: DbId,
    pub exam_name: String,
    pub exam_date: NaiveDate,
    pub subject_id: DbId,
    pub subject_name: String,
}

/// One mark in a bulk upsert for an exam.
#[derive(Debug, Deserialize)]
pub struct UpsertMark {
    pub student_id: DbId,
    pub subject_id: DbId,
    pub marks_obtained: f64,
    pub max_marks: f64,
}
