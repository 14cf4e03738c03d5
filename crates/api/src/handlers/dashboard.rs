//! Handler for the student dashboard statistics.

use axum::extract::State;
use axum::Json;

use acadex_core::stats::{DashboardStats, DashboardStatsService};
use acadex_db::stores::PgStore;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/stats
///
/// The caller's three dashboard stats. A stat whose fetch failed is `null`;
/// the other two still populate (each is backed by its own query).
pub async fn stats(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<DashboardStats>>> {
    let store = PgStore::new(state.pool.clone());
    let report = DashboardStatsService::new(&store)
        .collect(user.user_id)
        .await;

    for failure in &report.failures {
        tracing::warn!(
            user_id = user.user_id,
            stat = failure.stat,
            error = %failure.error,
            "Dashboard stat computation failed"
        );
    }

    Ok(Json(DataResponse { data: report.stats }))
}
