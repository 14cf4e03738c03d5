//! Handlers for the `/announcements` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use acadex_core::error::CoreError;
use acadex_core::roles::ROLE_STUDENT;
use acadex_core::types::DbId;
use acadex_db::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};
use acadex_db::repositories::{AnnouncementRepo, ProfileRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /announcements`.
#[derive(Debug, Deserialize)]
pub struct AnnouncementQuery {
    pub class_id: Option<DbId>,
}

/// GET /api/v1/announcements
///
/// Staff see every announcement (optionally filtered by `class_id`);
/// students are implicitly scoped to their own class and get an empty list
/// when they have none.
pub async fn list_announcements(
    State(state): State<AppState>,
    user: AuthUser,
    Query(query): Query<AnnouncementQuery>,
) -> AppResult<Json<DataResponse<Vec<Announcement>>>> {
    if user.role == ROLE_STUDENT {
        let profile = ProfileRepo::find_by_user(&state.pool, user.user_id).await?;
        let Some(class_id) = profile.and_then(|p| p.class_id) else {
            return Ok(Json(DataResponse { data: Vec::new() }));
        };
        let announcements = AnnouncementRepo::list_by_class(&state.pool, class_id).await?;
        return Ok(Json(DataResponse {
            data: announcements,
        }));
    }

    let announcements = match query.class_id {
        Some(class_id) => AnnouncementRepo::list_by_class(&state.pool, class_id).await?,
        None => AnnouncementRepo::list(&state.pool).await?,
    };
    Ok(Json(DataResponse {
        data: announcements,
    }))
}

/// POST /api/v1/announcements
pub async fn create_announcement(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(input): Json<CreateAnnouncement>,
) -> AppResult<(StatusCode, Json<DataResponse<Announcement>>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Announcement title must not be empty".into(),
        )));
    }
    let announcement = AnnouncementRepo::create(&state.pool, staff.user_id, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: announcement }),
    ))
}

/// PUT /api/v1/announcements/{id}
pub async fn update_announcement(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAnnouncement>,
) -> AppResult<Json<DataResponse<Announcement>>> {
    let announcement = AnnouncementRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "announcement",
            id,
        }))?;
    Ok(Json(DataResponse { data: announcement }))
}

/// DELETE /api/v1/announcements/{id}
pub async fn delete_announcement(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AnnouncementRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "announcement",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
