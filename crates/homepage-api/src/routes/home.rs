//! The home route: every method on `/` gets the same static body.

use axum::routing::any;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", any(home))
}

/// Static welcome body, regardless of method, query, or payload.
async fn home() -> &'static str {
    "Welcome to the Home page"
}
