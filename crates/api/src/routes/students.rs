//! Route definitions for the `/students` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::students;
use crate::state::AppState;

/// ```text
/// GET /students              list all students (staff)
/// PUT /students/{user_id}    update a student's profile (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/students", get(students::list_students))
        .route("/students/{user_id}", put(students::update_student))
}
