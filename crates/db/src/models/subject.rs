//! Subject and chapter entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use acadex_core::types::{DbId, Timestamp};

/// A row from the `subjects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subject {
    pub id: DbId,
    pub class_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// A row from the `chapters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Chapter {
    pub id: DbId,
    pub subject_id: DbId,
    pub title: String,
    pub created_at: Timestamp,
}

/// DTO for creating a subject under a class.
#[derive(Debug, Deserialize)]
pub struct CreateSubject {
    pub name: String,
}

/// DTO for creating a chapter under a subject.
#[derive(Debug, Deserialize)]
pub struct CreateChapter {
    pub title: String,
}
