mod health;

use axum::Router;

use crate::state::AppState;

/// Build the complete application router.
///
/// Structure:
/// - `GET /health` — health check with database connectivity
pub fn router() -> Router<AppState> {
    Router::new().merge(health::router())
}
