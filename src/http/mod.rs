//! HTTP server startup and shutdown.
//!
//! The server binds a plain HTTP listener (TLS termination is the hosting
//! platform's responsibility) and drains in-flight requests gracefully on
//! SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
