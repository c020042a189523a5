//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is
//! running. Used by Kubernetes, ECS, systemd, and load balancers to verify the
//! service is alive.

use axum::Json;
use serde_json::{json, Value};

/// Health check handler.
///
/// This is a liveness probe - it only checks that the process can respond to HTTP.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
