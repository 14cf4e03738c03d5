//! Route definitions for the `/announcements` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::announcements;
use crate::state::AppState;

/// ```text
/// GET    /announcements       list (auth; students scoped to own class)
/// POST   /announcements       create (staff)
/// PUT    /announcements/{id}  update (staff)
/// DELETE /announcements/{id}  delete (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/announcements",
            get(announcements::list_announcements).post(announcements::create_announcement),
        )
        .route(
            "/announcements/{id}",
            put(announcements::update_announcement).delete(announcements::delete_announcement),
        )
}
