//! Signup, login, token refresh, and logout.
//!
//! Refresh tokens rotate on every use: the presented session is revoked and
//! a new one opened, so a replayed token dies at the database lookup.
//! Repeated bad passwords lock the account for a cooldown window.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use acadex_core::error::CoreError;
use acadex_core::roles::ROLE_STUDENT;
use acadex_core::types::DbId;
use acadex_db::models::session::CreateSession;
use acadex_db::models::user::{CreateUser, User};
use acadex_db::repositories::{ProfileRepo, RoleRepo, SessionRepo, UserRepo};

use crate::auth::jwt::{mint_refresh_token, refresh_token_digest};
use crate::auth::password::{check_password_strength, hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Bad passwords tolerated before the account locks.
const MAX_FAILED_LOGINS: i32 = 5;

/// Lockout cooldown in minutes.
const LOCKOUT_MINS: i64 = 15;

/// Body of `POST /auth/signup`. Open student registration.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body of `POST /auth/refresh`.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// What signup, login, and refresh all return.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    /// Seconds until the access token expires.
    pub expires_in: i64,
    pub user: UserInfo,
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
}

/// POST /api/v1/auth/signup
///
/// Creates a `student` account with an empty profile and signs it in.
/// Staff accounts are provisioned by an admin, never self-registered.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    check_password_strength(&input.password)?;

    let role = RoleRepo::find_by_name(&state.pool, ROLE_STUDENT)
        .await?
        .ok_or_else(|| AppError::Internal("student role is not seeded".into()))?;

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
    ProfileRepo::create(&state.pool, user.id, input.full_name.as_deref()).await?;

    let response = start_session(&state, &user, &role.name).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(bad_credentials)?;

    ensure_account_usable(&user)?;

    let password_ok = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("password verification failed: {e}")))?;

    if !password_ok {
        register_failed_login(&state, &user).await?;
        return Err(bad_credentials());
    }

    UserRepo::note_successful_login(&state.pool, user.id).await?;

    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
    let response = start_session(&state, &user, &role).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/refresh
///
/// Exchanges a live refresh token for a new token pair.
pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<AuthResponse>> {
    let digest = refresh_token_digest(&input.refresh_token);
    let session = SessionRepo::find_active_by_digest(&state.pool, &digest)
        .await?
        .ok_or_else(|| CoreError::Unauthorized("Invalid or expired refresh token".into()))?;

    // Rotation: the presented token is spent regardless of what follows.
    SessionRepo::revoke(&state.pool, session.id).await?;

    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(|| CoreError::Unauthorized("User no longer exists".into()))?;

    ensure_account_usable(&user)?;

    let role = RoleRepo::resolve_name(&state.pool, user.role_id).await?;
    let response = start_session(&state, &user, &role).await?;
    Ok(Json(response))
}

/// POST /api/v1/auth/logout
///
/// Revokes every session the caller holds, on all devices.
pub async fn logout(State(state): State<AppState>, user: AuthUser) -> AppResult<StatusCode> {
    SessionRepo::revoke_all_for_user(&state.pool, user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn bad_credentials() -> AppError {
    // Same message whether the username or the password was wrong.
    AppError::Core(CoreError::Unauthorized("Invalid username or password".into()))
}

/// Deactivated and locked accounts cannot sign in or refresh.
fn ensure_account_usable(user: &User) -> Result<(), AppError> {
    if !user.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is deactivated".into(),
        )));
    }
    if let Some(locked_until) = user.locked_until {
        if locked_until > Utc::now() {
            return Err(AppError::Core(CoreError::Forbidden(
                "Account is temporarily locked. Try again later.".into(),
            )));
        }
    }
    Ok(())
}

/// Count the failure and lock the account once it crosses the threshold.
async fn register_failed_login(state: &AppState, user: &User) -> AppResult<()> {
    UserRepo::note_failed_login(&state.pool, user.id).await?;
    if user.failed_login_count + 1 >= MAX_FAILED_LOGINS {
        let until = Utc::now() + Duration::minutes(LOCKOUT_MINS);
        UserRepo::lock_until(&state.pool, user.id, until).await?;
    }
    Ok(())
}

/// Issue a token pair, persist the refresh side, and shape the response.
async fn start_session(state: &AppState, user: &User, role: &str) -> AppResult<AuthResponse> {
    let jwt = &state.config.jwt;

    let access_token = jwt
        .issue_access_token(user.id, role)
        .map_err(|e| AppError::Internal(format!("token signing failed: {e}")))?;

    let (refresh_token, digest) = mint_refresh_token();
    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            refresh_token_hash: digest,
            expires_at: Utc::now() + Duration::days(jwt.refresh_ttl_days),
        },
    )
    .await?;

    Ok(AuthResponse {
        access_token,
        refresh_token,
        expires_in: jwt.access_ttl_mins * 60,
        user: UserInfo {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: role.to_string(),
        },
    })
}
