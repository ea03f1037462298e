//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

use gateway::Gateway;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// SQLite database URL.
    pub database_url: String,
    /// Upstream node access key; `None` selects fixture mode.
    pub infura_key: Option<String>,
    /// Deployed contract address.
    pub contract_address: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `API_ADDR` | Server bind address | `127.0.0.1:8000` |
    /// | `DATABASE_URL` | SQLite database URL | `sqlite:crowdfund.db?mode=rwc` |
    /// | `INFURA_KEY` | Node access key; unset or empty selects fixture mode | (optional) |
    /// | `CONTRACT_ADDRESS` | Deployed contract address | `0x8123d34f5b52e8852cda1accac646b34dd4c77b5` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("API_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:crowdfund.db?mode=rwc".to_string());

        let infura_key = env::var("INFURA_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let contract_address = env::var("CONTRACT_ADDRESS")
            .unwrap_or_else(|_| "0x8123d34f5b52e8852cda1accac646b34dd4c77b5".to_string());

        Ok(Self {
            addr,
            database_url,
            infura_key,
            contract_address,
        })
    }

    /// Construct the gateway for the configured mode.
    ///
    /// A missing access key is the explicit fixture-mode switch. A key
    /// with an unusable endpoint or contract address is a startup error,
    /// never a silent fallback.
    pub fn gateway(&self) -> Result<Gateway, gateway::GatewayError> {
        match &self.infura_key {
            Some(key) => {
                let endpoint = format!("https://sepolia.infura.io/v3/{key}");
                Gateway::live(&endpoint, &self.contract_address)
            }
            None => Ok(Gateway::fixture()),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API_ADDR format")]
    InvalidAddr,
}
