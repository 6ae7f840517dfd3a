//! HTTP API for the PI-Credit status service.
//!
//! Serves a liveness probe at `/health` and the database-backed status
//! message at `/`, with request logging through `tracing`.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use gateway::{DatabaseConfig, PostgresGateway, StatusGateway};
use tower_http::trace::TraceLayer;

use routes::index::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<G: StatusGateway + 'static>(state: Arc<AppState<G>>) -> Router {
    Router::new()
        .route("/health", get(routes::health::check))
        .route("/", get(routes::index::get::<G>))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Creates the production state backed by PostgreSQL.
pub fn create_default_state(database: DatabaseConfig) -> Arc<AppState<PostgresGateway>> {
    Arc::new(AppState {
        gateway: PostgresGateway::new(database),
    })
}
