//! Handlers for the `/files` resource (URL links attached to a parent).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use acadex_core::error::CoreError;
use acadex_core::types::DbId;
use acadex_db::models::file::{CreateFileLink, FileLink};
use acadex_db::repositories::FileRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireStaff};
use crate::response::DataResponse;
use crate::state::AppState;

/// Parent types a file link may attach to.
const PARENT_TYPES: &[&str] = &["class", "subject", "chapter"];

/// Query parameters for `GET /files`.
#[derive(Debug, Deserialize)]
pub struct FileQuery {
    pub parent_type: String,
    pub parent_id: DbId,
}

fn validate_parent_type(parent_type: &str) -> Result<(), AppError> {
    if !PARENT_TYPES.contains(&parent_type) {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Unknown parent type: {parent_type}"
        ))));
    }
    Ok(())
}

/// GET /api/v1/files?parent_type=..&parent_id=..
pub async fn list_files(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(query): Query<FileQuery>,
) -> AppResult<Json<DataResponse<Vec<FileLink>>>> {
    validate_parent_type(&query.parent_type)?;
    let files = FileRepo::list_for_parent(&state.pool, &query.parent_type, query.parent_id).await?;
    Ok(Json(DataResponse { data: files }))
}

/// POST /api/v1/files
pub async fn create_file(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(input): Json<CreateFileLink>,
) -> AppResult<(StatusCode, Json<DataResponse<FileLink>>)> {
    validate_parent_type(&input.parent_type)?;
    let file = FileRepo::create(&state.pool, staff.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: file })))
}

/// DELETE /api/v1/files/{id}
pub async fn delete_file(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FileRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "file", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}
