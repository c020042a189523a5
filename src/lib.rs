//! Greeter - a minimal JSON greeting service for container platforms.
//!
//! The service exposes a fixed greeting at `GET /` and a liveness probe at
//! `GET /health`. TLS termination, scaling, and traffic routing are the
//! hosting platform's job; this process just answers HTTP on the configured
//! host and port.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
