//! HTTP error mapping.
//!
//! Handlers return [`AppResult`]; every failure path funnels through
//! [`AppError`], which renders as `{ "error": ..., "code": ... }` JSON with
//! the matching status code. Database messages never reach the client --
//! they are logged and replaced with a generic body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use acadex_core::error::CoreError;

/// Error type shared by all handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Domain error from `acadex-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Query or connection failure from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Server-side failure outside the database (hashing, token signing).
    #[error("internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Stable machine-readable codes for the response body.
mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION: &str = "VALIDATION_ERROR";
    pub const CONFLICT: &str = "CONFLICT";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const INTERNAL: &str = "INTERNAL_ERROR";
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl AppError {
    fn render(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    codes::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, codes::VALIDATION, msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, codes::CONFLICT, msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, codes::UNAUTHORIZED, msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, codes::FORBIDDEN, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Core internal error");
                    internal()
                }
            },
            AppError::Database(err) => database_parts(err),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        codes::INTERNAL,
        INTERNAL_MESSAGE.to_string(),
    )
}

/// Map a sqlx failure onto a response.
///
/// `RowNotFound` becomes 404. A Postgres unique violation (SQLSTATE 23505)
/// on one of our `uq_`-named constraints becomes 409, since those keys all
/// guard user-visible uniqueness (usernames, one mark per subject, one
/// attendance row per day). Everything else is a 500.
fn database_parts(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if matches!(err, sqlx::Error::RowNotFound) {
        return (
            StatusCode::NOT_FOUND,
            codes::NOT_FOUND,
            "Resource not found".to_string(),
        );
    }

    if let sqlx::Error::Database(db_err) = err {
        if db_err.code().as_deref() == Some("23505") {
            if let Some(constraint) = db_err.constraint().filter(|c| c.starts_with("uq_")) {
                return (
                    StatusCode::CONFLICT,
                    codes::CONFLICT,
                    format!("Duplicate value violates unique constraint: {constraint}"),
                );
            }
        }
    }

    tracing::error!(error = %err, "Database error");
    internal()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.render();
        let body = json!({ "error": message, "code": code });
        (status, axum::Json(body)).into_response()
    }
}
