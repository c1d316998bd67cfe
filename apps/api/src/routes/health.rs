use axum::Json;
use serde_json::{json, Value};

/// GET /test
/// Liveness probe.
pub async fn test_handler() -> Json<Value> {
    Json(json!({ "message": "Server works" }))
}
