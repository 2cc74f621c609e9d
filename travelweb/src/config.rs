//! Configuration loader for the travelweb server.
//!
//! Reads the two process settings from environment variables: `PORT`
//! (listener bind port) and `CONN_STR` (database connection URI, carries
//! embedded credentials). Both are required; `from_env` reports a
//! descriptive error instead of panicking somewhere deeper in startup.
//! `.env` files are loaded by `main` before this runs.
//!
use std::env;

use anyhow::{Result, anyhow};

/// Application configuration read once at startup.
pub struct Config {
    /// Listener bind port
    pub port: u16,
    /// Database connection URI; never log this raw, see `db::redact_credentials`
    pub conn_str: String,
}

impl Config {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT").map_err(|_| anyhow!("PORT missing in environment"))?;
        let port = parse_port(&port)?;

        let conn_str =
            env::var("CONN_STR").map_err(|_| anyhow!("CONN_STR missing in environment"))?;
        if conn_str.trim().is_empty() {
            return Err(anyhow!("CONN_STR is empty"));
        }

        Ok(Config { port, conn_str })
    }
}

/// Parse a port value, rejecting anything that cannot be bound.
fn parse_port(value: &str) -> Result<u16> {
    let port: u16 = value
        .trim()
        .parse()
        .map_err(|_| anyhow!("PORT is not a valid port number: {value:?}"))?;
    if port == 0 {
        return Err(anyhow!("PORT must be nonzero"));
    }
    Ok(port)
}
