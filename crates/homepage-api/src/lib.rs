//! # homepage-api
//!
//! A single-route HTTP service built on Axum/Tokio. Serves a static welcome
//! body at `/` and, when a database is configured, verifies Postgres
//! reachability at startup and keeps the pool on [`AppState`] for the
//! readiness probe.
//!
//! ## API Surface
//!
//! | Method | Path                | Response                          |
//! |--------|---------------------|-----------------------------------|
//! | any    | `/`                 | `200`, `Welcome to the Home page` |
//! | GET    | `/health/liveness`  | `200`, `ok`                       |
//! | GET    | `/health/readiness` | `200 ready` / `503 degraded`      |
//!
//! Everything else falls through to Axum's default 404.

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the application router.
///
/// Health probes are mounted alongside the home route; both surfaces are
/// unauthenticated by design.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::home::router())
        .merge(routes::health::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
