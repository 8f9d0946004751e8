use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version, the model in use and
/// the simulated widget delays.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "folio-api",
        "projects": state.projects.len(),
        "llm_model": state.llm.model(),
        "simulated_delays_ms": {
            "semantic": state.config.semantic_delay_ms,
            "chat": state.config.chat_delay_ms,
            "insights": state.config.insights_delay_ms,
        },
    }))
}
