//! Crowdfunding dashboard REST API.
//!
//! JSON surface over the off-chain store plus a read-through proxy over
//! the on-chain campaign ledger. The API never writes to the chain; all
//! chain writes are wallet-signed client-side against the contract.

mod config;
mod error;
mod routes;
mod state;

use database::Database;
use gateway::GatewayMode;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting API server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Construct the contract gateway; the mode is fixed here and never
    // changes at runtime.
    let gw = config.gateway()?;
    match gw.mode() {
        GatewayMode::Live => {
            info!(contract = %config.contract_address, "Contract gateway connected")
        }
        GatewayMode::Fixture => {
            info!("No node access key configured, serving fixture campaign data")
        }
    }

    // Build application state
    let state = AppState::new(db, gw);

    // Build router
    let app = routes::router().with_state(state);

    // Start server
    info!(addr = %config.addr, "API server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
