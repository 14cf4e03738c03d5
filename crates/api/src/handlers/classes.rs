//! Handlers for the `/classes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use acadex_core::error::CoreError;
use acadex_core::types::DbId;
use acadex_db::models::class::{Class, CreateClass, UpdateClass};
use acadex_db::models::profile::Profile;
use acadex_db::repositories::{ClassRepo, ProfileRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireStaff};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/classes
pub async fn list_classes(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
) -> AppResult<Json<DataResponse<Vec<Class>>>> {
    let classes = ClassRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: classes }))
}

/// POST /api/v1/classes
pub async fn create_class(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateClass>,
) -> AppResult<(StatusCode, Json<DataResponse<Class>>)> {
    let class = ClassRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: class })))
}

/// GET /api/v1/classes/{id}
pub async fn get_class(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Class>>> {
    let class = ClassRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "class", id }))?;
    Ok(Json(DataResponse { data: class }))
}

/// PUT /api/v1/classes/{id}
pub async fn update_class(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClass>,
) -> AppResult<Json<DataResponse<Class>>> {
    let class = ClassRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "class", id }))?;
    Ok(Json(DataResponse { data: class }))
}

/// DELETE /api/v1/classes/{id}
pub async fn delete_class(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ClassRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "class", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/classes/{id}/students
///
/// The class roster, ordered by display name.
pub async fn list_class_students(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Profile>>>> {
    let students = ProfileRepo::list_by_class(&state.pool, id).await?;
    Ok(Json(DataResponse { data: students }))
}
