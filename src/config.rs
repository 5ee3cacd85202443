//! Environment-derived server configuration

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Process-level settings read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port; 0 requests an OS-assigned ephemeral port
    pub port: u16,
    /// When set, the bound port is written here as decimal text
    pub port_file: Option<PathBuf>,
    /// When set, log output is appended to this file instead of stderr
    pub log_file: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid PORT")?,
            port_file: env::var("PORT_FILE").ok().map(PathBuf::from),
            log_file: env::var("LOG_FILE").ok().map(PathBuf::from),
        })
    }

    /// The address handed to the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
