//! travelweb crate entrypoint.
//!
//! Starts the Tokio runtime, loads configuration, and launches the web
//! server defined in the `server` module. Keep this file minimal — most
//! application logic lives in `server`, `config`, and `db`.
//!
/// HTTP server implementation and request handling
mod server;
/// Configuration management and settings
mod config;
/// Database connection bootstrap and state
mod db;
/// HTML pages and wrappers
mod html;

use tracing_subscriber::EnvFilter;

/// Entry point for the async Tokio runtime
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = config::Config::from_env()?;
    server::run(config).await
}
