//! Environment-driven configuration, read once at process start.

use std::env;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string (`DATABASE_URL`). Optional: without it the
    /// process runs in degraded mode.
    pub database_url: Option<String>,
    /// Database name within the store (`DATABASE_NAME`).
    pub database_name: Option<String>,
    /// HTTP listener port (`PORT`, default 8000).
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: non_empty_var("DATABASE_URL"),
            database_name: non_empty_var("DATABASE_NAME"),
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_PORT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            database_name: None,
            port: DEFAULT_PORT,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}
