//! Gateway error types.

use thiserror::Error;

/// Errors that can occur while talking to the contract gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// RPC endpoint URL failed to parse.
    #[error("invalid rpc endpoint: {0}")]
    InvalidEndpoint(String),

    /// Address failed to parse.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// Contract call failed or reverted.
    #[error("gateway call failed: {0}")]
    Rpc(String),

    /// Fixture mode knows no campaign with this id.
    #[error("Campaign not found: {id}")]
    NotFound { id: u64 },

    /// Embedded ABI blob failed to parse.
    #[error("contract abi: {0}")]
    Abi(#[from] serde_json::Error),
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
