//! File link entity model and DTOs.
//!
//! Files are stored as plain URL strings attached to a parent entity;
//! there is no upload pipeline.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use acadex_core::types::{DbId, Timestamp};

/// A row from the `files` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FileLink {
    pub id: DbId,
    pub title: String,
    pub file_url: String,
    pub file_type: String,
    /// `"class"`, `"subject"`, or `"chapter"` (DB CHECK constraint).
    pub parent_type: String,
    pub parent_id: DbId,
    pub uploaded_by: DbId,
    pub created_at: Timestamp,
}

/// DTO for attaching a file link to a parent entity.
#[derive(Debug, Deserialize)]
pub struct CreateFileLink {
    pub title: String,
    pub file_url: String,
    pub file_type: String,
    pub parent_type: String,
    pub parent_id: DbId,
}
