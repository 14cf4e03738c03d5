//! Handler for `/me` (the caller's own account and profile).

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use acadex_core::error::CoreError;
use acadex_db::models::profile::ProfileWithClass;
use acadex_db::repositories::{ProfileRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for `GET /me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub username: String,
    pub email: String,
    pub role: String,
    /// Student profile with class title; `None` for staff accounts.
    pub profile: Option<ProfileWithClass>,
}

/// GET /api/v1/me
pub async fn me(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<MeResponse>>> {
    let account = UserRepo::find_by_id(&state.pool, user.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    let profile = ProfileRepo::find_with_class(&state.pool, user.user_id).await?;

    Ok(Json(DataResponse {
        data: MeResponse {
            username: account.username,
            email: account.email,
            role: user.role,
            profile,
        },
    }))
}
