//! Exam entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use acadex_core::types::{DbId, Timestamp};

/// A row from the `exams` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Exam {
    pub id: DbId,
    pub class_id: DbId,
    pub name: String,
    pub date: NaiveDate,
    pub created_by: DbId,
    pub created_at: Timestamp,
}

/// DTO for creating an exam under a class.
#[derive(Debug, Deserialize)]
pub struct CreateExam {
    pub name: String,
    pub date: NaiveDate,
}
