//! The `{ "data": ... }` response envelope.

use serde::Serialize;

/// Wrapper every successful JSON response goes through, so clients can rely
/// on one shape. `data` may be `null` for "nothing here yet" results such
/// as a class with no leaderboard.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
