pub mod admin;
pub mod announcements;
pub mod attendance;
pub mod auth;
pub mod classes;
pub mod dashboard;
pub mod fees;
pub mod files;
pub mod health;
pub mod leaderboard;
pub mod notifications;
pub mod profile;
pub mod students;
pub mod subjects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup                         student registration (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
///
/// /me                                  current account + profile
///
/// /admin/users                         list, create (admin only)
/// /admin/users/{id}/deactivate         deactivate account (PUT)
/// /admin/reports/students/{id}         student report (staff)
///
/// /classes                             list (staff), create (admin)
/// /classes/{id}                        get (staff), update, delete (admin)
/// /classes/{id}/students               class roster (staff)
/// /classes/{id}/subjects               list (auth), create (staff)
/// /classes/{id}/exams                  list (auth), create (staff)
///
/// /subjects/{id}                       delete (staff)
/// /subjects/{id}/chapters              list (auth), create (staff)
/// /chapters/{id}                       delete (staff)
///
/// /students                            list all students (staff)
/// /students/{user_id}                  update profile (admin)
///
/// /attendance                          record for class+date (staff, POST)
///                                      list for class+date (staff, GET)
/// /attendance/me                       own history (auth)
///
/// /exams/{id}                          delete (staff)
/// /exams/{id}/marks                    list (staff, GET), bulk upsert (staff, PUT)
/// /marks/me                            own marks with context (auth)
///
/// /leaderboard                         top-10 for own class (auth)
/// /leaderboard/full                    full roster with metadata (auth)
///
/// /dashboard/stats                     attendance / courses / average (auth)
///
/// /announcements                       list (auth; students scoped), create (staff)
/// /announcements/{id}                  update, delete (staff)
///
/// /fees/structures                     list, create (admin)
/// /fees/structures/{id}                delete (admin)
/// /fees/payments                       list, record (admin)
/// /fees/summary                        summary view (admin)
/// /fees/me                             own fee position (auth)
///
/// /files                               list by parent (auth), create (staff)
/// /files/{id}                          delete (staff)
///
/// /notifications                       create (staff)
/// /notifications/me                    own notifications (auth)
/// /notifications/{id}/read             mark read (auth, PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(profile::router())
        .merge(admin::router())
        .merge(classes::router())
        .merge(subjects::router())
        .merge(students::router())
        .merge(attendance::router())
        .merge(classes::exam_router())
        .merge(leaderboard::router())
        .merge(dashboard::router())
        .merge(announcements::router())
        .merge(fees::router())
        .merge(files::router())
        .merge(notifications::router())
}
