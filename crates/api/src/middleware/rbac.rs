//! Role gates layered on top of [`AuthUser`].
//!
//! Routes express their access rule through the extractor they take:
//! `RequireAdmin` for admin-only mutations, `RequireStaff` for anything a
//! teacher may also do, `RequireAuth` when any signed-in user qualifies.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use acadex_core::error::CoreError;
use acadex_core::roles::{ROLE_ADMIN, ROLE_TEACHER};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Admin only.
pub struct RequireAdmin(pub AuthUser);

/// Teacher or admin.
pub struct RequireStaff(pub AuthUser);

/// Any authenticated user. Same as taking [`AuthUser`] directly, but reads
/// consistently next to the other two in route definitions.
pub struct RequireAuth(pub AuthUser);

fn gate(user: AuthUser, allowed: &[&str], denial: &str) -> Result<AuthUser, AppError> {
    if allowed.contains(&user.role.as_str()) {
        Ok(user)
    } else {
        Err(AppError::Core(CoreError::Forbidden(denial.to_string())))
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        gate(user, &[ROLE_ADMIN], "Admin role required").map(RequireAdmin)
    }
}

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        gate(
            user,
            &[ROLE_ADMIN, ROLE_TEACHER],
            "Teacher or admin role required",
        )
        .map(RequireStaff)
    }
}

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthUser::from_request_parts(parts, state).await.map(RequireAuth)
    }
}
