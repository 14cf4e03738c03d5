//! Route definitions for the `/leaderboard` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::leaderboard;
use crate::state::AppState;

/// ```text
/// GET /leaderboard       top-10 for the caller's class (auth)
/// GET /leaderboard/full  full roster with exam/class metadata (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/leaderboard", get(leaderboard::summary))
        .route("/leaderboard/full", get(leaderboard::full))
}
