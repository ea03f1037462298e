//! Application state shared across handlers.

use database::Database;
use gateway::Gateway;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Off-chain store connection.
    pub db: Database,
    /// Contract gateway handle, mode fixed at startup.
    pub gateway: Gateway,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, gateway: Gateway) -> Self {
        Self { db, gateway }
    }
}
