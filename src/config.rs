//! Service configuration.
//!
//! Configuration is environment-driven with a CLI override: the bind
//! address comes from `--bind`, else `DOCREADY_BIND_ADDR`, else the
//! default.

use std::net::SocketAddr;

use crate::error::{ReadyError, Result};

/// Environment variable controlling the bind address.
pub const BIND_ADDR_ENV: &str = "DOCREADY_BIND_ADDR";

/// Default bind address when nothing is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Resolved service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address the HTTP server listens on.
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let addr = std::env::var(BIND_ADDR_ENV).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        Self::from_bind_addr(&addr)
    }

    /// Build configuration from an explicit bind address string.
    pub fn from_bind_addr(addr: &str) -> Result<Self> {
        let bind_addr = addr
            .parse()
            .map_err(|err: std::net::AddrParseError| ReadyError::InvalidBindAddr {
                addr: addr.to_string(),
                message: err.to_string(),
            })?;
        Ok(Self { bind_addr })
    }
}
