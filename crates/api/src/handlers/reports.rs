//! Handler for the per-student report used by the admin analytics screen.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use acadex_core::error::CoreError;
use acadex_core::report::{report_statistics, ReportStatistics};
use acadex_core::types::DbId;
use acadex_db::models::fee::{FeePayment, StudentFeeSummary};
use acadex_db::models::mark::MarkWithContext;
use acadex_db::models::profile::ProfileWithClass;
use acadex_db::repositories::{FeeRepo, MarkRepo, ProfileRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireStaff;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response payload for `GET /admin/reports/students/{id}`.
#[derive(Debug, Serialize)]
pub struct StudentReport {
    pub profile: ProfileWithClass,
    pub marks: Vec<MarkWithContext>,
    /// `None` when no fee structure applies, or when the fee lookup failed
    /// (fee data is optional context, not part of the academic report).
    pub fee_summary: Option<StudentFeeSummary>,
    pub fee_payments: Vec<FeePayment>,
    pub statistics: ReportStatistics,
}

/// GET /api/v1/admin/reports/students/{id}
///
/// Profile, full mark history, fee position, and aggregate statistics for
/// one student. The fee lookups degrade to empty on failure so a broken
/// fees table cannot take down the academic report.
pub async fn student_report(
    State(state): State<AppState>,
    RequireStaff(_staff): RequireStaff,
    Path(student_id): Path<DbId>,
) -> AppResult<Json<DataResponse<StudentReport>>> {
    let profile = ProfileRepo::find_with_class(&state.pool, student_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "profile",
            id: student_id,
        }))?;

    let marks = MarkRepo::list_with_context(&state.pool, student_id).await?;

    let fee_summary = match FeeRepo::summary_for_student(&state.pool, student_id).await {
        Ok(summary) => summary,
        Err(err) => {
            tracing::warn!(student_id, error = %err, "Fee summary lookup failed");
            None
        }
    };

    let fee_payments = match FeeRepo::list_payments_for_student(&state.pool, student_id).await {
        Ok(payments) => payments,
        Err(err) => {
            tracing::warn!(student_id, error = %err, "Fee payments lookup failed");
            Vec::new()
        }
    };

    let pairs: Vec<(f64, f64)> = marks.iter().map(|m| (m.marks_obtained, m.max_marks)).collect();
    let statistics = report_statistics(&pairs);

    Ok(Json(DataResponse {
        data: StudentReport {
            profile,
            marks,
            fee_summary,
            fee_payments,
            statistics,
        },
    }))
}
