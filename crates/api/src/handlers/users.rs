//! Admin account management under `/admin/users`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use acadex_core::error::CoreError;
use acadex_core::roles::ROLE_STUDENT;
use acadex_core::types::DbId;
use acadex_db::models::user::{CreateUser, UpdateUser, UserWithRole};
use acadex_db::repositories::{ProfileRepo, RoleRepo, UserRepo};

use crate::auth::password::{check_password_strength, hash_password};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body of `POST /admin/users`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub password: String,
    /// Role name: `"admin"`, `"teacher"`, or `"student"`.
    pub role: String,
    pub full_name: Option<String>,
}

/// GET /api/v1/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<UserWithRole>>>> {
    let users = UserRepo::list_with_role(&state.pool).await?;
    Ok(Json(DataResponse { data: users }))
}

/// POST /api/v1/admin/users
///
/// Create an account with any role. Students also get an empty profile so
/// a class can be assigned afterwards.
pub async fn create_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserWithRole>>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    check_password_strength(&input.password)?;

    let role = RoleRepo::find_by_name(&state.pool, &input.role)
        .await?
        .ok_or_else(|| CoreError::Validation(format!("Unknown role: {}", input.role)))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::Internal(format!("password hashing failed: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username: input.username,
            email: input.email,
            password_hash,
            role_id: role.id,
        },
    )
    .await?;

    if role.name == ROLE_STUDENT {
        ProfileRepo::create(&state.pool, user.id, input.full_name.as_deref()).await?;
    }

    let response = UserWithRole {
        id: user.id,
        username: user.username,
        email: user.email,
        role: role.name,
        role_id: user.role_id,
        is_active: user.is_active,
        last_login_at: user.last_login_at,
        created_at: user.created_at,
    };

    Ok((StatusCode::CREATED, Json(DataResponse { data: response })))
}

/// PUT /api/v1/admin/users/{id}/deactivate
///
/// A deactivated account keeps its rows but can no longer sign in.
pub async fn deactivate_user(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let input = UpdateUser {
        username: None,
        email: None,
        role_id: None,
        is_active: Some(false),
    };
    UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "user", id }))?;
    Ok(StatusCode::NO_CONTENT)
}
