//! Route definition for `/me`.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/me", get(profile::me))
}
