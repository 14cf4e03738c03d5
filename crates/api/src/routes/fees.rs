//! Route definitions for the `/fees` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::fees;
use crate::state::AppState;

/// ```text
/// GET    /fees/structures       list structures (admin)
/// POST   /fees/structures       create structure (admin)
/// DELETE /fees/structures/{id}  delete structure (admin)
/// GET    /fees/payments         list payments (admin)
/// POST   /fees/payments         record payment (admin)
/// GET    /fees/summary          fee summary view (admin)
/// GET    /fees/me               own fee position (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/fees/structures",
            get(fees::list_structures).post(fees::create_structure),
        )
        .route("/fees/structures/{id}", delete(fees::delete_structure))
        .route(
            "/fees/payments",
            get(fees::list_payments).post(fees::record_payment),
        )
        .route("/fees/summary", get(fees::list_summary))
        .route("/fees/me", get(fees::my_fees))
}
