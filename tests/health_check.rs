//! Health endpoint tests against an in-memory database.

// Relax linting for tests - they don't need production-level strictness
#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

mod common;

use axum::Router;
use axum::http::StatusCode;
use migration::{Migrator, MigratorTrait};

use betterauth::config::{Config, Environment};
use betterauth::state::AppState;

async fn test_app() -> Router {
    let db = sea_orm::Database::connect("sqlite::memory:")
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");

    let state = AppState {
        db,
        config: Config {
            database_url: String::new(),
            server_host: std::net::IpAddr::from([127, 0, 0, 1]),
            server_port: 0,
            environment: Environment::Development,
            log_level: "warn".to_string(),
        },
    };

    betterauth::routes::router().with_state(state)
}

#[tokio::test]
async fn health_reports_connected_database() {
    let app = test_app().await;

    let (status, body) = common::get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK, "health failed: {body}");

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["database"], "connected");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = test_app().await;

    let (status, _body) = common::get(&app, "/does-not-exist").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
