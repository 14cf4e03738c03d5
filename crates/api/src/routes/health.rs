//! Liveness endpoint, mounted at the root rather than under `/api/v1` so
//! load balancers can probe it without a version prefix.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

/// GET /health
///
/// Always answers 200; a broken database shows up as `"degraded"` in the
/// body so the probe can distinguish "down" from "up but unhappy".
async fn health(State(state): State<AppState>) -> Json<Health> {
    let db_healthy = acadex_db::health_check(&state.pool).await.is_ok();

    Json(Health {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
