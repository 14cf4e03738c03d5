//! Handlers for the `/students` resource (staff views of student profiles).

use axum::extract::{Path, State};
use axum::Json;

use acadex_core::error::CoreError;
use acadex_core::types::DbId;
use acadex_db::models::profile::{Profile, ProfileWithClass, UpdateProfile};
use acadex_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireStaff};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/students
///
/// Every student profile with its class title, newest first.
pub async fn list_students(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<Json<DataResponse<Vec<ProfileWithClass>>>> {
    let students = ProfileRepo::list_with_class(&state.pool).await?;
    Ok(Json(DataResponse { data: students }))
}

/// PUT /api/v1/students/{user_id}
///
/// Update a student's profile (name, roll number, class assignment).
pub async fn update_student(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(user_id): Path<DbId>,
    Json(input): Json<UpdateProfile>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let profile = ProfileRepo::update(&state.pool, user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "profile",
            id: user_id,
        }))?;
    Ok(Json(DataResponse { data: profile }))
}
