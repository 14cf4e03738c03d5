//! Handlers for the `/fees` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use acadex_core::error::CoreError;
use acadex_core::fees::{fee_status, FeeStatus};
use acadex_core::types::DbId;
use acadex_db::models::fee::{
    CreateFeePayment, CreateFeeStructure, FeePayment, FeeStructure, StudentFeeSummary,
};
use acadex_db::repositories::FeeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for `GET /fees/me`.
#[derive(Debug, Serialize)]
pub struct MyFeesResponse {
    /// Computed position for the latest academic year, or `None` when no
    /// fee structure applies to the student yet.
    pub status: Option<FeeStatus>,
    pub academic_year: Option<String>,
    pub payments: Vec<FeePayment>,
}

/// GET /api/v1/fees/structures
pub async fn list_structures(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<FeeStructure>>>> {
    let structures = FeeRepo::list_structures(&state.pool).await?;
    Ok(Json(DataResponse { data: structures }))
}

/// POST /api/v1/fees/structures
pub async fn create_structure(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateFeeStructure>,
) -> AppResult<(StatusCode, Json<DataResponse<FeeStructure>>)> {
    if input.amount < 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "Fee amount must not be negative".into(),
        )));
    }
    let structure = FeeRepo::create_structure(&state.pool, admin.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: structure })))
}

/// DELETE /api/v1/fees/structures/{id}
pub async fn delete_structure(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = FeeRepo::delete_structure(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "fee structure",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/fees/payments
pub async fn list_payments(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<FeePayment>>>> {
    let payments = FeeRepo::list_payments(&state.pool).await?;
    Ok(Json(DataResponse { data: payments }))
}

/// POST /api/v1/fees/payments
pub async fn record_payment(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateFeePayment>,
) -> AppResult<(StatusCode, Json<DataResponse<FeePayment>>)> {
    if input.amount <= 0.0 {
        return Err(AppError::Core(CoreError::Validation(
            "Payment amount must be positive".into(),
        )));
    }
    let payment = FeeRepo::create_payment(&state.pool, admin.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: payment })))
}

/// GET /api/v1/fees/summary
///
/// The whole fee summary view, one row per student and academic year.
pub async fn list_summary(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<StudentFeeSummary>>>> {
    let summary = FeeRepo::list_summary(&state.pool).await?;
    Ok(Json(DataResponse { data: summary }))
}

/// GET /api/v1/fees/me
///
/// The calling student's fee position and payment history.
pub async fn my_fees(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<MyFeesResponse>>> {
    let summary = FeeRepo::summary_for_student(&state.pool, user.user_id).await?;
    let payments = FeeRepo::list_payments_for_student(&state.pool, user.user_id).await?;

    let (status, academic_year) = match summary {
        Some(row) => (
            Some(fee_status(row.total_fees, row.paid_amount)),
            Some(row.academic_year),
        ),
        None => (None, None),
    };

    Ok(Json(DataResponse {
        data: MyFeesResponse {
            status,
            academic_year,
            payments,
        },
    }))
}
