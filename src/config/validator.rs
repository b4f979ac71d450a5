//! Sanity checks on loaded settings, so misconfiguration fails at startup.

use crate::config::AppConfig;
use crate::error::ConfigError;

pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if !(config.database_url.starts_with("postgres://") || config.database_url.starts_with("postgresql://")) {
        return Err(ConfigError::Invalid {
            key: "DATABASE_URL",
            reason: "expected a postgres:// or postgresql:// url".into(),
        });
    }
    check_host_port(&config.server_address)?;
    if config.db_max_connections == 0 {
        return Err(ConfigError::Invalid {
            key: "DB_MAX_CONNECTIONS",
            reason: "must be at least 1".into(),
        });
    }
    if config.max_body_bytes == 0 {
        return Err(ConfigError::Invalid {
            key: "MAX_BODY_BYTES",
            reason: "must be at least 1".into(),
        });
    }
    Ok(())
}

/// `host:port` where host is a name, an IPv4 literal or a bracketed IPv6 literal.
/// Names are resolved later, when the listener binds.
fn check_host_port(address: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::Invalid {
        key: "SERVER_ADDRESS",
        reason: format!("'{}': {}", address, reason),
    };
    let (host, port) = address.rsplit_once(':').ok_or_else(|| invalid("expected host:port"))?;
    if host.is_empty() {
        return Err(invalid("missing host"));
    }
    port.parse::<u16>().map_err(|_| invalid("port must be a number between 0 and 65535"))?;
    Ok(())
}
