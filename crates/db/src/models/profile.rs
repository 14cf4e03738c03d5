//! Student profile entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use acadex_core::types::{DbId, Timestamp};

/// A row from the `profiles` table. One per student user.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub user_id: DbId,
    pub full_name: Option<String>,
    pub roll_no: Option<String>,
    pub class_id: Option<DbId>,
    pub profile_image: Option<String>,
    pub created_at: Timestamp,
}

/// Profile joined with its class title, for listings and `/me`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProfileWithClass {
    pub id: DbId,
    pub user_id: DbId,
    pub full_name: Option<String>,
    pub roll_no: Option<String>,
    pub class_id: Option<DbId>,
    pub profile_image: Option<String>,
    pub class_title: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for updating a profile. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateProfile {
    pub full_name: Option<String>,
    pub roll_no: Option<String>,
    pub class_id: Option<DbId>,
    pub profile_image: Option<String>,
}
