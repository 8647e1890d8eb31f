//! Runtime configuration.
//!
//! The configuration is read from the environment exactly once, at process
//! start, and the resulting [`Config`] value is passed explicitly to every
//! store access. A `.env` file in the working directory is honored.
//!
//! A missing `LEME_DATABASE` does not abort startup: the database location
//! stays unset and every subsequent store operation fails with a
//! store-level error instead.

use dotenv::dotenv;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable holding the SQLite database file path.
pub const ENV_DATABASE: &str = "LEME_DATABASE";
/// Environment variable holding the API bind address (`host:porta`).
pub const ENV_ADDR: &str = "LEME_ADDR";

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file; `None` when unconfigured.
    pub database: Option<PathBuf>,
    /// Bind address for the HTTP API.
    pub addr: SocketAddr,
}

impl Config {
    /// Reads the configuration from the environment (and `.env`, if present).
    pub fn from_env() -> Self {
        dotenv().ok();
        let database = env::var(ENV_DATABASE).ok().map(PathBuf::from);
        let addr = env::var(ENV_ADDR)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_else(default_addr);
        Config { database, addr }
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}
