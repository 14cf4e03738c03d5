//! Route definitions for the `/files` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::files;
use crate::state::AppState;

/// ```text
/// GET    /files        list by parent (auth)
/// POST   /files        attach a link (staff)
/// DELETE /files/{id}   delete a link (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/files", get(files::list_files).post(files::create_file))
        .route("/files/{id}", delete(files::delete_file))
}
