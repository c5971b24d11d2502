//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `PLANTPOWER_HOST` - Bind address (default: 127.0.0.1)
//! - `PLANTPOWER_PORT` - Listen port (default: 3000)
//! - `PLANTPOWER_BASE_URL` - Public URL for the storefront
//!   (default: `http://localhost:3000`)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_host(&get_env_or_default("PLANTPOWER_HOST", "127.0.0.1"))?;
        let port = parse_port(&get_env_or_default("PLANTPOWER_PORT", "3000"))?;
        let base_url = get_env_or_default("PLANTPOWER_BASE_URL", "http://localhost:3000");

        Ok(Self {
            host,
            port,
            base_url,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a bind address.
fn parse_host(value: &str) -> Result<IpAddr, ConfigError> {
    value
        .parse::<IpAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar("PLANTPOWER_HOST".to_string(), e.to_string()))
}

/// Parse a listen port.
fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar("PLANTPOWER_PORT".to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_valid() {
        assert_eq!(parse_host("0.0.0.0").unwrap().to_string(), "0.0.0.0");
        assert_eq!(parse_host("::1").unwrap().to_string(), "::1");
    }

    #[test]
    fn test_parse_host_invalid() {
        let err = parse_host("not-an-ip").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
        assert!(err.to_string().contains("PLANTPOWER_HOST"));
    }

    #[test]
    fn test_parse_port_invalid() {
        assert!(parse_port("70000").is_err());
        assert!(parse_port("meals").is_err());
        assert_eq!(parse_port("3000").unwrap(), 3000);
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
