//! Handlers for the `/attendance` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::Deserialize;

use acadex_core::stats::AttendanceStatus;
use acadex_core::types::DbId;
use acadex_db::models::attendance::{AttendanceEntry, AttendanceRecord};
use acadex_db::repositories::AttendanceRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /attendance`: a class's attendance for one date.
#[derive(Debug, Deserialize)]
pub struct RecordAttendanceRequest {
    pub class_id: DbId,
    pub date: NaiveDate,
    pub entries: Vec<AttendanceEntry>,
}

/// Query parameters for `GET /attendance`.
#[derive(Debug, Deserialize)]
pub struct AttendanceQuery {
    pub class_id: DbId,
    pub date: NaiveDate,
}

/// POST /api/v1/attendance
///
/// Record (or re-record) a class's attendance for a date. Upserts on the
/// (class, student, date) key so corrections overwrite the original mark.
pub async fn record_attendance(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Json(input): Json<RecordAttendanceRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Vec<AttendanceRecord>>>)> {
    // Reject unknown status strings before touching the database.
    for entry in &input.entries {
        AttendanceStatus::from_str(&entry.status).map_err(AppError::Core)?;
    }

    let records = AttendanceRepo::record_for_class(
        &state.pool,
        input.class_id,
        input.date,
        staff.user_id,
        &input.entries,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: records })))
}

/// GET /api/v1/attendance?class_id=..&date=..
///
/// A class's attendance for one date. Staff only.
pub async fn list_class_attendance(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Query(query): Query<AttendanceQuery>,
) -> AppResult<Json<DataResponse<Vec<AttendanceRecord>>>> {
    let records =
        AttendanceRepo::list_for_class_date(&state.pool, query.class_id, query.date).await?;
    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/attendance/me
///
/// The calling student's own attendance history, most recent first.
pub async fn my_attendance(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<AttendanceRecord>>>> {
    let records = AttendanceRepo::list_for_student(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: records }))
}
