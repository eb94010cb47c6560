use std::env;

use crate::storage::cached::DEFAULT_STRIPES;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "rsvp.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Number of per-id lock stripes in the cache layer (default: 64, minimum: 1)
    pub cache_lock_stripes: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "rsvp.db")
    /// - `CACHE_LOCK_STRIPES` - Per-id lock stripes (default: 64)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "rsvp.db".to_string()),
            cache_lock_stripes: env::var("CACHE_LOCK_STRIPES")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|&n| n > 0)
                .unwrap_or(DEFAULT_STRIPES),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
