//! Integration tests for the HTTP routes.
//!
//! Requests are driven in-process against the router via `tower::ServiceExt`,
//! so no listening socket is needed and nothing leaks across tests.
//!
//! Run with: cargo test --test home_route_test

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use tower::ServiceExt;

use greeter::config::CACHE_CONTROL_HOME;
use greeter::routes::create_router;

/// Response parts captured for assertions.
struct TestResponse {
    status: StatusCode,
    content_type: Option<String>,
    cache_control: Option<String>,
    body: Vec<u8>,
}

/// Send a single request against a freshly built router.
async fn send(method: Method, path: &str) -> TestResponse {
    let app = create_router();
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .expect("failed to build request"),
        )
        .await
        .expect("router returned an error");

    let status = response.status();
    let header_str = |name: header::HeaderName| {
        response
            .headers()
            .get(name)
            .map(|v| v.to_str().expect("non-ASCII header value").to_owned())
    };
    let content_type = header_str(header::CONTENT_TYPE);
    let cache_control = header_str(header::CACHE_CONTROL);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body")
        .to_vec();

    TestResponse {
        status,
        content_type,
        cache_control,
        body,
    }
}

#[tokio::test]
async fn home_route_returns_greeting() {
    let response = send(Method::GET, "/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.content_type.as_deref(), Some("application/json"));

    let json: serde_json::Value =
        serde_json::from_slice(&response.body).expect("body is not valid JSON");
    assert_eq!(
        json["message"], "Hello from Flask App on Kubernetes!",
        "unexpected greeting payload: {json}"
    );
}

#[tokio::test]
async fn home_route_is_deterministic() {
    let first = send(Method::GET, "/").await;
    let second = send(Method::GET, "/").await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(first.body, second.body, "greeting changed between requests");
}

#[tokio::test]
async fn home_route_sets_cache_control() {
    let response = send(Method::GET, "/").await;

    assert_eq!(response.cache_control.as_deref(), Some(CACHE_CONTROL_HOME));
}

#[tokio::test]
async fn unknown_path_returns_not_found() {
    let response = send(Method::GET, "/nonexistent").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_to_home_is_method_not_allowed() {
    let response = send(Method::POST, "/").await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn health_route_returns_ok() {
    let response = send(Method::GET, "/health").await;

    assert_eq!(response.status, StatusCode::OK);

    let json: serde_json::Value =
        serde_json::from_slice(&response.body).expect("body is not valid JSON");
    assert_eq!(json["status"], "ok");
}
