//! Server settings read from the environment (and a `.env` file if present).
//!
//! - `SHOP_HOST` - bind address (default: 0.0.0.0)
//! - `SHOP_PORT` - listen port (default: 8070)

use std::env;
use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "8070";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_vars(env::var("SHOP_HOST").ok(), env::var("SHOP_PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self, ConfigError> {
        let host = host
            .as_deref()
            .unwrap_or(DEFAULT_HOST)
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOP_HOST".to_string(), e.to_string()))?;
        let port = port
            .as_deref()
            .unwrap_or(DEFAULT_PORT)
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SHOP_PORT".to_string(), e.to_string()))?;
        Ok(ServerConfig { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_bind_all_interfaces() {
        let config = ServerConfig::from_vars(None, None).unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8070");
    }

    #[test]
    fn test_overrides() {
        let config =
            ServerConfig::from_vars(Some("127.0.0.1".to_string()), Some("9000".to_string())).unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_vars(None, Some("eighty".to_string())).unwrap_err();
        assert!(err.to_string().starts_with("Invalid environment variable SHOP_PORT"));
    }
}
