//! HTTP route handlers.
//!
//! Routes are grouped by caching behavior: the greeting payload is static and
//! carries a short public Cache-Control, while the health probe must always be
//! answered fresh.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_HOME;
use crate::middleware::request_id_layer;

/// Creates the Axum router with all routes and cache headers.
///
/// Unknown paths and unsupported methods fall through to the framework
/// defaults (404 and 405 respectively).
pub fn create_router() -> Router {
    // Greeting - static payload, short cache
    let home_routes = Router::new().route("/", get(home::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ),
    );

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(home_routes)
        .merge(health_routes)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
