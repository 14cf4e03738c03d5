//! Error-to-HTTP mapping: every error variant must map to the documented
//! status code so clients can rely on them.

use axum::http::StatusCode;
use axum::response::IntoResponse;

use acadex_api::error::AppError;
use acadex_core::error::CoreError;

#[test]
fn not_found_maps_to_404() {
    let response = AppError::Core(CoreError::NotFound {
        entity: "class",
        id: 7,
    })
    .into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn validation_maps_to_400() {
    let response = AppError::Core(CoreError::Validation("bad input".into())).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn conflict_maps_to_409() {
    let response = AppError::Core(CoreError::Conflict("duplicate".into())).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[test]
fn unauthorized_maps_to_401() {
    let response = AppError::Core(CoreError::Unauthorized("no token".into())).into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[test]
fn forbidden_maps_to_403() {
    let response = AppError::Core(CoreError::Forbidden("students only".into())).into_response();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[test]
fn core_internal_maps_to_500() {
    let response = AppError::Core(CoreError::Internal("boom".into())).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn app_internal_maps_to_500() {
    let response = AppError::Internal("hashing failed".into()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn database_row_not_found_maps_to_404() {
    let response = AppError::Database(sqlx::Error::RowNotFound).into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
