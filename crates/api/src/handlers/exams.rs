//! Handlers for exams and their marks.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use acadex_core::error::CoreError;
use acadex_core::types::DbId;
use acadex_db::models::exam::{CreateExam, Exam};
use acadex_db::models::mark::{MarkWithContext, StudentMark, UpsertMark};
use acadex_db::repositories::{ExamRepo, MarkRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::{RequireAuth, RequireStaff};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /exams/{id}/marks`.
#[derive(Debug, Deserialize)]
pub struct SaveMarksRequest {
    pub marks: Vec<UpsertMark>,
}

/// GET /api/v1/classes/{id}/exams
pub async fn list_class_exams(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(class_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Exam>>>> {
    let exams = ExamRepo::list_by_class(&state.pool, class_id).await?;
    Ok(Json(DataResponse { data: exams }))
}

/// POST /api/v1/classes/{id}/exams
pub async fn create_exam(
    State(state): State<AppState>,
    RequireStaff(staff): RequireStaff,
    Path(class_id): Path<DbId>,
    Json(input): Json<CreateExam>,
) -> AppResult<(StatusCode, Json<DataResponse<Exam>>)> {
    let exam = ExamRepo::create(&state.pool, class_id, staff.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: exam })))
}

/// DELETE /api/v1/exams/{id}
///
/// Removes the exam and, via FK cascade, its marks.
pub async fn delete_exam(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ExamRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "exam", id }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/exams/{id}/marks
///
/// Bulk-upsert marks for an exam. Re-submitting a (student, subject) pair
/// overwrites the earlier score.
pub async fn save_marks(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(exam_id): Path<DbId>,
    Json(input): Json<SaveMarksRequest>,
) -> AppResult<Json<DataResponse<Vec<StudentMark>>>> {
    let exam = ExamRepo::find_by_id(&state.pool, exam_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "exam",
            id: exam_id,
        }))?;

    for mark in &input.marks {
        if mark.marks_obtained < 0.0 {
            return Err(AppError::Core(CoreError::Validation(
                "Marks obtained must not be negative".into(),
            )));
        }
        if mark.max_marks <= 0.0 {
            return Err(AppError::Core(CoreError::Validation(
                "Max marks must be positive".into(),
            )));
        }
    }

    let saved = MarkRepo::upsert_for_exam(&state.pool, exam.id, &input.marks).await?;
    Ok(Json(DataResponse { data: saved }))
}

/// GET /api/v1/exams/{id}/marks
pub async fn list_exam_marks(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(exam_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<StudentMark>>>> {
    let marks = MarkRepo::list_by_exam(&state.pool, exam_id).await?;
    Ok(Json(DataResponse { data: marks }))
}

/// GET /api/v1/marks/me
///
/// The calling student's marks across all exams, with exam and subject
/// context, oldest first.
pub async fn my_marks(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<MarkWithContext>>>> {
    let marks = MarkRepo::list_with_context(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: marks }))
}
