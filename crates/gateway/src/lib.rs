//! Read-only client for the on-chain crowdfunding ledger.
//!
//! The contract is the single source of truth for campaign funding state;
//! this crate only reads it. All chain writes are signed client-side
//! against the contract directly, so the served [`ContractInfo`] carries
//! the full ABI wallet clients need to build those transactions.
//!
//! The gateway runs in one of two modes fixed at construction: [`Live`]
//! talks JSON-RPC to a node, [`Fixture`] serves deterministic canned data
//! for offline development. The mode never changes at runtime.
//!
//! [`Live`]: GatewayMode::Live
//! [`Fixture`]: GatewayMode::Fixture

mod contract;
mod convert;
mod error;
mod fixture;

pub use contract::LiveGateway;
pub use convert::wei_to_ether;
pub use error::{GatewayError, Result};
pub use fixture::FixtureGateway;

use serde::Serialize;

/// A campaign as read from the chain, funding amounts already in ETH.
///
/// Field names serialize to the wire names wallet clients expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Campaign {
    pub id: u64,
    pub creator: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "fundingGoal")]
    pub funding_goal: f64,
    #[serde(rename = "currentAmount")]
    pub current_amount: f64,
    /// Unix timestamp.
    pub deadline: u64,
    pub claimed: bool,
    pub exists: bool,
}

/// Contract address and ABI for client-side transaction construction.
#[derive(Debug, Clone, Serialize)]
pub struct ContractInfo {
    pub address: String,
    pub abi: serde_json::Value,
}

/// Operating mode, fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayMode {
    /// Reads go to the contract over JSON-RPC.
    Live,
    /// Reads serve deterministic fixture data.
    Fixture,
}

/// Handle to the campaign ledger in either mode.
#[derive(Debug, Clone)]
pub enum Gateway {
    Live(LiveGateway),
    Fixture(FixtureGateway),
}

impl Gateway {
    /// Connect to the deployed contract over JSON-RPC.
    ///
    /// Fails fast on an unparseable endpoint or address rather than
    /// falling back to fixture data.
    pub fn live(rpc_url: &str, contract_address: &str) -> Result<Self> {
        Ok(Self::Live(LiveGateway::new(rpc_url, contract_address)?))
    }

    /// Serve deterministic fixture data, no chain connection.
    pub fn fixture() -> Self {
        Self::Fixture(FixtureGateway)
    }

    pub fn mode(&self) -> GatewayMode {
        match self {
            Gateway::Live(_) => GatewayMode::Live,
            Gateway::Fixture(_) => GatewayMode::Fixture,
        }
    }

    /// Enumerate all campaigns on the ledger.
    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>> {
        match self {
            Gateway::Live(gw) => gw.list_campaigns().await,
            Gateway::Fixture(fx) => Ok(fx.list_campaigns()),
        }
    }

    /// Read a single campaign by its chain id.
    pub async fn get_campaign(&self, id: u64) -> Result<Campaign> {
        match self {
            Gateway::Live(gw) => gw.get_campaign(id).await,
            Gateway::Fixture(fx) => fx.get_campaign(id),
        }
    }

    /// Read the contribution of one address to one campaign, in ETH.
    pub async fn get_contribution(&self, campaign_id: u64, address: &str) -> Result<f64> {
        match self {
            Gateway::Live(gw) => gw.get_contribution(campaign_id, address).await,
            Gateway::Fixture(fx) => Ok(fx.get_contribution(campaign_id, address)),
        }
    }

    /// Contract address and ABI for wallet clients.
    pub fn contract_info(&self) -> Result<ContractInfo> {
        let address = match self {
            Gateway::Live(gw) => gw.address(),
            Gateway::Fixture(_) => fixture::SAMPLE_CONTRACT_ADDRESS.to_string(),
        };

        Ok(ContractInfo {
            address,
            abi: contract::embedded_abi()?,
        })
    }
}
