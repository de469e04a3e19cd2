//! Health probes, unauthenticated.
//!
//! Liveness answers whenever the process runs. Readiness re-runs the
//! startup liveness ping against the pool, when one is configured; a
//! service without a database is always ready.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use crate::db;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
}

async fn liveness() -> &'static str {
    "ok"
}

async fn readiness(State(state): State<AppState>) -> (StatusCode, &'static str) {
    match &state.db {
        None => (StatusCode::OK, "ready"),
        Some(pool) => match db::ping(pool).await {
            Ok(()) => (StatusCode::OK, "ready"),
            Err(e) => {
                tracing::warn!("readiness ping failed: {e}");
                (StatusCode::SERVICE_UNAVAILABLE, "degraded")
            }
        },
    }
}
