//! Attendance entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use acadex_core::types::{DbId, Timestamp};

/// A row from the `attendance` table.
///
/// One row per (class, student, date); re-marking the same day updates the
/// existing row.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttendanceRecord {
    pub id: DbId,
    pub class_id: DbId,
    pub student_id: DbId,
    pub date: NaiveDate,
    /// `"present"` or `"absent"` (DB CHECK constraint).
    pub status: String,
    pub marked_by: DbId,
    pub created_at: Timestamp,
}

/// One student's status in a bulk attendance submission.
#[derive(Debug, Deserialize)]
pub struct AttendanceEntry {
    pub student_id: DbId,
    pub status: String,
}
