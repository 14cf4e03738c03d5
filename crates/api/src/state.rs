use std::sync::Arc;

use crate::config::ServerConfig;

/// State handed to every handler through Axum's `State` extractor.
///
/// Cloned per request; both fields are cheap handles.
#[derive(Clone)]
pub struct AppState {
    pub pool: acadex_db::DbPool,
    pub config: Arc<ServerConfig>,
}
