//! Announcement entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use acadex_core::types::{DbId, Timestamp};

/// A row from the `announcements` table, joined with its class title.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Announcement {
    pub id: DbId,
    pub class_id: DbId,
    pub title: String,
    pub content: String,
    pub link: Option<String>,
    pub created_by: Option<DbId>,
    pub class_title: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an announcement.
#[derive(Debug, Deserialize)]
pub struct CreateAnnouncement {
    pub class_id: DbId,
    pub title: String,
    pub content: String,
    pub link: Option<String>,
}

/// DTO for updating an announcement. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateAnnouncement {
    pub title: Option<String>,
    pub content: Option<String>,
    pub link: Option<String>,
}
