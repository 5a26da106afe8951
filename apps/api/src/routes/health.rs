use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /api/health
/// Returns a simple status object with service version, model, and embedding policy.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "careerforge-api",
        "model": state.llm.model(),
        "embedding_policy": format!("{:?}", state.config.embedding_policy)
    }))
}
