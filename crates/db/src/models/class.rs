//! Class entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use acadex_core::types::{DbId, Timestamp};

/// A row from the `classes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Class {
    pub id: DbId,
    pub title: String,
    pub academic_year: String,
    pub teacher_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for creating a class.
#[derive(Debug, Deserialize)]
pub struct CreateClass {
    pub title: String,
    pub academic_year: String,
    pub teacher_id: Option<DbId>,
}

/// DTO for updating a class. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateClass {
    pub title: Option<String>,
    pub academic_year: Option<String>,
    pub teacher_id: Option<DbId>,
}
