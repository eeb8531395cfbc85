use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

/// `GET /health` — service liveness plus database connectivity.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let database = match state.db.ping().await {
        Ok(()) => "connected",
        Err(_) => "disconnected",
    };

    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
            "database": database,
        })),
    )
}

/// Register health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
