//! Route definitions for the `/notifications` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

/// ```text
/// POST /notifications            send to one user (staff)
/// GET  /notifications/me         own notifications (auth)
/// PUT  /notifications/{id}/read  mark read (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notifications", post(notifications::create_notification))
        .route("/notifications/me", get(notifications::my_notifications))
        .route("/notifications/{id}/read", put(notifications::mark_read))
}
