//! Handlers for subjects and chapters.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use acadex_core::error::CoreError;
use acadex_core::types::DbId;
use acadex_db::models::subject::{Chapter, CreateChapter, CreateSubject, Subject};
use acadex_db::repositories::SubjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireStaff};
use crate::response::DataResponse;
use crate::state::AppState;

/// A subject with its chapters inlined, as the UI consumes it.
#[derive(Debug, Serialize)]
pub struct SubjectWithChapters {
    #[serde(flatten)]
    pub subject: Subject,
    pub chapters: Vec<Chapter>,
}

/// GET /api/v1/classes/{id}/subjects
///
/// A class's subjects with their chapters.
pub async fn list_class_subjects(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(class_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<SubjectWithChapters>>>> {
    let subjects = SubjectRepo::list_by_class(&state.pool, class_id).await?;

    let mut data = Vec::with_capacity(subjects.len());
    for subject in subjects {
        let chapters = SubjectRepo::list_chapters(&state.pool, subject.id).await?;
        data.push(SubjectWithChapters { subject, chapters });
    }

    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/classes/{id}/subjects
pub async fn create_subject(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(class_id): Path<DbId>,
    Json(input): Json<CreateSubject>,
) -> AppResult<(StatusCode, Json<DataResponse<Subject>>)> {
    let subject = SubjectRepo::create(&state.pool, class_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: subject })))
}

/// DELETE /api/v1/subjects/{id}
pub async fn delete_subject(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SubjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "subject",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/subjects/{id}/chapters
pub async fn list_chapters(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Path(subject_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Chapter>>>> {
    let chapters = SubjectRepo::list_chapters(&state.pool, subject_id).await?;
    Ok(Json(DataResponse { data: chapters }))
}

/// POST /api/v1/subjects/{id}/chapters
pub async fn create_chapter(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(subject_id): Path<DbId>,
    Json(input): Json<CreateChapter>,
) -> AppResult<(StatusCode, Json<DataResponse<Chapter>>)> {
    let chapter = SubjectRepo::create_chapter(&state.pool, subject_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: chapter })))
}

/// DELETE /api/v1/chapters/{id}
pub async fn delete_chapter(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = SubjectRepo::delete_chapter(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "chapter",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
