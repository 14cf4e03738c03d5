//! Route definitions for the `/admin` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::{reports, users};
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// ```text
/// GET  /users                        list accounts (admin)
/// POST /users                        create account (admin)
/// PUT  /users/{id}/deactivate        deactivate account (admin)
/// GET  /reports/students/{id}        per-student report (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/admin/users",
            get(users::list_users).post(users::create_user),
        )
        .route(
            "/admin/users/{id}/deactivate",
            put(users::deactivate_user),
        )
        .route(
            "/admin/reports/students/{id}",
            get(reports::student_report),
        )
}
