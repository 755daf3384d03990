//! Server configuration read from environment variables.

use std::path::PathBuf;

use anyhow::Context;

/// Port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 5000;

/// Runtime configuration for the server binary.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind, from `HOST` (default `0.0.0.0`).
    pub host: String,
    /// TCP port, from `PORT` (default 5000).
    pub port: u16,
    /// Directory of static site files to serve, from `STATIC_DIR`.
    /// Unset or missing on disk means API-only.
    pub static_dir: Option<PathBuf>,
    /// Custom chat response table JSON, from `CHAT_RESPONSES`.
    pub response_file: Option<String>,
}

impl ServerConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_port(std::env::var("PORT").ok())?,
            static_dir: std::env::var("STATIC_DIR").ok().map(PathBuf::from),
            response_file: std::env::var("CHAT_RESPONSES").ok(),
        })
    }

    /// `host:port` string for the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(raw: Option<String>) -> anyhow::Result<u16> {
    match raw {
        Some(value) => value
            .parse()
            .with_context(|| format!("invalid PORT value '{}'", value)),
        None => Ok(DEFAULT_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port_default() {
        assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    }

    #[test]
    fn test_parse_port_explicit() {
        assert_eq!(parse_port(Some("8080".to_string())).unwrap(), 8080);
    }

    #[test]
    fn test_parse_port_rejects_garbage() {
        let err = parse_port(Some("not-a-port".to_string())).unwrap_err();
        assert!(err.to_string().contains("not-a-port"));
    }

    #[test]
    fn test_bind_addr_format() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 5000,
            static_dir: None,
            response_file: None,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    }
}
