//! Greeter: a minimal JSON greeting service.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from a TOML file, builds the Axum router, and runs the HTTP
//! server until a shutdown signal arrives.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greeter::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use greeter::http::start_server;
use greeter::routes::create_router;

/// Greeter: a minimal JSON greeting service
#[derive(Parser, Debug)]
#[command(name = "greeter", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "greeter=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration before tracing init so the log format can apply
    let config = AppConfig::load(&args.config)?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    if Path::new(&args.config).exists() {
        tracing::info!(path = %args.config, "Loaded configuration");
    } else {
        tracing::info!(path = %args.config, "No config file found, using built-in defaults");
    }

    // Create router
    let app = create_router();

    // Start server (blocks until shutdown)
    start_server(app, &config).await?;

    Ok(())
}
