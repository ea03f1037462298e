//! Input validation for wallet-facing identifiers.

use std::fmt;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Invalid wallet address format.
    InvalidWalletAddress(String),
    /// Invalid transaction hash format.
    InvalidTransactionHash(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidWalletAddress(msg) => {
                write!(f, "Invalid wallet address: {}", msg)
            }
            ValidationError::InvalidTransactionHash(msg) => {
                write!(f, "Invalid transaction hash: {}", msg)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Length of a wallet address: "0x" plus 40 hex digits.
pub const WALLET_ADDRESS_LENGTH: usize = 42;

/// Length of a transaction hash: "0x" plus 64 hex digits.
pub const TRANSACTION_HASH_LENGTH: usize = 66;

/// Validate a wallet address.
pub fn validate_wallet_address(address: &str) -> Result<(), ValidationError> {
    validate_hex_id(address, WALLET_ADDRESS_LENGTH)
        .map_err(ValidationError::InvalidWalletAddress)
}

/// Validate a transaction hash.
pub fn validate_transaction_hash(hash: &str) -> Result<(), ValidationError> {
    validate_hex_id(hash, TRANSACTION_HASH_LENGTH)
        .map_err(ValidationError::InvalidTransactionHash)
}

fn validate_hex_id(value: &str, expected_len: usize) -> Result<(), String> {
    if value.len() != expected_len {
        return Err(format!(
            "expected {} characters, got {}",
            expected_len,
            value.len()
        ));
    }

    if !value.starts_with("0x") {
        return Err("must start with 0x".to_string());
    }

    if !value[2..].chars().all(|c| c.is_ascii_hexdigit()) {
        return Err("must be hexadecimal after the 0x prefix".to_string());
    }

    Ok(())
}
