//! Runtime settings for the server process.

use std::time::Duration;

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_DB_ACQUIRE_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 10;
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// PostgreSQL connection string (`DATABASE_URL`).
    pub database_url: String,
    /// Listen address, `host:port` (`SERVER_ADDRESS`).
    pub server_address: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout_secs: u64,
    /// How long in-flight requests may run after a shutdown signal.
    pub shutdown_grace_secs: u64,
    pub max_body_bytes: usize,
}

impl AppConfig {
    pub fn db_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.db_acquire_timeout_secs)
    }

    pub fn shutdown_grace(&self) -> Duration {
        Duration::from_secs(self.shutdown_grace_secs)
    }
}
