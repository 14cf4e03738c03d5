//! Route definitions for subjects and chapters outside the `/classes` nest.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::subjects;
use crate::state::AppState;

/// ```text
/// DELETE /subjects/{id}           delete subject (staff)
/// GET    /subjects/{id}/chapters  list chapters (auth)
/// POST   /subjects/{id}/chapters  create chapter (staff)
/// DELETE /chapters/{id}           delete chapter (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/subjects/{id}", delete(subjects::delete_subject))
        .route(
            "/subjects/{id}/chapters",
            get(subjects::list_chapters).post(subjects::create_chapter),
        )
        .route("/chapters/{id}", delete(subjects::delete_chapter))
}
