//! Route definitions for the `/attendance` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::attendance;
use crate::state::AppState;

/// ```text
/// POST /attendance       record a class's attendance for a date (staff)
/// GET  /attendance       list a class's attendance for a date (staff)
/// GET  /attendance/me    own attendance history (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/attendance",
            get(attendance::list_class_attendance).post(attendance::record_attendance),
        )
        .route("/attendance/me", get(attendance::my_attendance))
}
