//! Route definitions for the `/classes` resource and its nested children.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{classes, exams, subjects};
use crate::state::AppState;

/// Routes mounted at `/classes`.
///
/// ```text
/// GET    /                  list classes (staff)
/// POST   /                  create class (admin)
/// GET    /{id}              get class (staff)
/// PUT    /{id}              update class (admin)
/// DELETE /{id}              delete class (admin)
/// GET    /{id}/students     class roster (staff)
/// GET    /{id}/subjects     subjects with chapters (auth)
/// POST   /{id}/subjects     create subject (staff)
/// GET    /{id}/exams        list exams (auth)
/// POST   /{id}/exams        create exam (staff)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/classes",
            get(classes::list_classes).post(classes::create_class),
        )
        .route(
            "/classes/{id}",
            get(classes::get_class)
                .put(classes::update_class)
                .delete(classes::delete_class),
        )
        .route("/classes/{id}/students", get(classes::list_class_students))
        .route(
            "/classes/{id}/subjects",
            get(subjects::list_class_subjects).post(subjects::create_subject),
        )
        .route(
            "/classes/{id}/exams",
            get(exams::list_class_exams).post(exams::create_exam),
        )
}

/// Routes for exams and marks outside the `/classes` nest.
///
/// ```text
/// DELETE /exams/{id}        delete exam (staff)
/// GET    /exams/{id}/marks  list an exam's marks (staff)
/// PUT    /exams/{id}/marks  bulk upsert marks (staff)
/// GET    /marks/me          own marks with context (auth)
/// ```
pub fn exam_router() -> Router<AppState> {
    Router::new()
        .route("/exams/{id}", delete(exams::delete_exam))
        .route(
            "/exams/{id}/marks",
            get(exams::list_exam_marks).put(exams::save_marks),
        )
        .route("/marks/me", get(exams::my_marks))
}
