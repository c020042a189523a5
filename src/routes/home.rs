//! Greeting endpoint.
//!
//! The root route answers with a fixed JSON greeting. The payload is the whole
//! API surface of this service; the deployment around it (container image,
//! orchestration, ingress) lives outside this process.

use axum::Json;
use serde::Serialize;
use tracing::instrument;

use crate::config::GREETING_MESSAGE;

/// Greeting payload returned by the root route.
#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// Root route handler.
///
/// Stateless: every request gets an identical 200 response.
#[instrument(name = "home::index")]
pub async fn index() -> Json<Greeting> {
    Json(Greeting {
        message: GREETING_MESSAGE,
    })
}
