//! Handlers for the `/leaderboard` resource.
//!
//! Both variants resolve the calling student's class from their profile and
//! return `data: null` when no leaderboard is available yet (no class, no
//! exam, no roster, or no marks). Fetch failures surface as errors instead.

use axum::extract::State;
use axum::Json;

use acadex_core::leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardService};
use acadex_core::types::DbId;
use acadex_db::repositories::ProfileRepo;
use acadex_db::stores::PgStore;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/leaderboard
///
/// Top-10 summary for the most recent exam of the caller's class.
pub async fn summary(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Option<Vec<LeaderboardEntry>>>>> {
    let Some(class_id) = caller_class(&state, user.user_id).await? else {
        return Ok(Json(DataResponse { data: None }));
    };

    let store = PgStore::new(state.pool.clone());
    let entries = LeaderboardService::new(&store)
        .summary(class_id, user.user_id)
        .await?;

    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/leaderboard/full
///
/// Full-roster leaderboard with exam and class metadata.
pub async fn full(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<DataResponse<Option<Leaderboard>>>> {
    let Some(class_id) = caller_class(&state, user.user_id).await? else {
        return Ok(Json(DataResponse { data: None }));
    };

    let store = PgStore::new(state.pool.clone());
    let board = LeaderboardService::new(&store)
        .full(class_id, user.user_id)
        .await?;

    Ok(Json(DataResponse { data: board }))
}

/// The caller's class id, or `None` when they have no profile or no class.
async fn caller_class(state: &AppState, user_id: DbId) -> AppResult<Option<DbId>> {
    let profile = ProfileRepo::find_by_user(&state.pool, user_id).await?;
    Ok(profile.and_then(|p| p.class_id))
}
