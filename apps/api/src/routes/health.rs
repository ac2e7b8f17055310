use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, catalog version and the active text-generation backend.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let backend = state.explainer.backend();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "compass-api",
        "catalog_version": state.catalog.version,
        "text_backend": backend,
        "model": (backend == "llm").then(|| state.config.openai_model.clone()),
    }))
}
