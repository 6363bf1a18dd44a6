use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Router};
use stockproxy_storage_sqlite::db::check_connection;

use crate::main_lib::AppState;

pub async fn healthz() -> &'static str {
    "ok"
}

/// Ready once the database answers.
pub async fn readyz(State(state): State<Arc<AppState>>) -> (StatusCode, &'static str) {
    match check_connection(&state.pool) {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
