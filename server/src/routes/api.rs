use axum::Json;
use axum::extract::State;

use crate::state::AppState;

/// Liveness probe plus dataset visibility for deploy checks.
pub async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "dataset_available": state.record_count.is_some(),
        "records": state.record_count.unwrap_or(0),
    }))
}
