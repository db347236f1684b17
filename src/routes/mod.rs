//! HTTP routes

pub mod quotes;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

/// Liveness probe for the reverse proxy.
async fn health() -> &'static str {
    "ok"
}

/// Assemble the application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/quotes/calculate", post(quotes::calculate))
        .route("/api/quotes/options", get(quotes::options))
}
