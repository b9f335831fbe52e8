//! Service routes: index, liveness, readiness, version.

use crate::error::AppError;
use crate::state::AppState;
use crate::store::ping;
use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

async fn index() -> &'static str {
    "Servidor funcionando"
}

/// Liveness only; never touches the database.
async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "status": "ok", "driver": state.pool.driver() }))
}

/// One round trip on the shared pool. A closed pool or a failed query is 503.
async fn ready(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    if state.pool.is_closed() {
        return Err(AppError::Unavailable("database pool is closed".into()));
    }
    ping(&state.pool).await.map_err(|e| {
        tracing::warn!(error = %e, driver = state.pool.driver(), "database not reachable");
        AppError::Unavailable("database not reachable".into())
    })?;
    Ok(Json(json!({ "status": "ready" })))
}

async fn version() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .with_state(state)
}
