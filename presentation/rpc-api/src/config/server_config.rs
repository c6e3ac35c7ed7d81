use anyhow::Context;

use super::{Lookup, env_lookup};

/// Server configuration for the RPC listener and its worker pool
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
    pub workers: usize,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - SERVICE_IP: IP address to bind (default: "0.0.0.0")
    /// - PORT: Port to bind (default: "8080")
    /// - WORKER_THREADS: Size of the worker pool (default: 10)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(&env_lookup)
    }

    pub fn from_lookup(lookup: Lookup<'_>) -> anyhow::Result<Self> {
        let ip = lookup("SERVICE_IP").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("PORT").unwrap_or_else(|| "8080".to_string());
        port.parse::<u16>()
            .with_context(|| format!("PORT must be a valid port number, got {:?}", port))?;

        let workers = match lookup("WORKER_THREADS") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .with_context(|| format!("WORKER_THREADS must be a positive integer, got {:?}", raw))?,
            None => 10,
        };

        Ok(Self { ip, port, workers })
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}
