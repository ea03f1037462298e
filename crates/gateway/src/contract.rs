//! Live contract access over JSON-RPC.

use alloy::primitives::{Address, U256};
use alloy::providers::ProviderBuilder;
use alloy::sol;
use url::Url;

use crate::convert::wei_to_ether;
use crate::error::{GatewayError, Result};
use crate::Campaign;

sol! {
    #[sol(rpc)]
    interface ICrowdfund {
        function campaignCount() external view returns (uint256);

        function getCampaign(uint256 _campaignId) external view returns (
            address creator,
            string title,
            string description,
            string imageUrl,
            uint256 fundingGoal,
            uint256 currentAmount,
            uint256 deadline,
            bool claimed,
            bool exists
        );

        function getContribution(uint256 _campaignId, address _contributor)
            external view returns (uint256);
    }
}

pub(crate) const CONTRACT_ABI_JSON: &str = include_str!("abi.json");

/// Parse the embedded ABI blob served to wallet clients.
pub(crate) fn embedded_abi() -> Result<serde_json::Value> {
    Ok(serde_json::from_str(CONTRACT_ABI_JSON)?)
}

/// RPC-backed view over the deployed crowdfunding contract.
///
/// Holds a parsed endpoint and contract address; a provider is built per
/// call, so a transient RPC failure surfaces on that call alone and never
/// flips the gateway into another mode.
#[derive(Debug, Clone)]
pub struct LiveGateway {
    endpoint: Url,
    address: Address,
}

impl LiveGateway {
    /// Parse and validate the endpoint and contract address.
    pub fn new(rpc_url: &str, contract_address: &str) -> Result<Self> {
        let endpoint: Url = rpc_url
            .parse()
            .map_err(|_| GatewayError::InvalidEndpoint(rpc_url.to_string()))?;
        let address: Address = contract_address
            .parse()
            .map_err(|_| GatewayError::InvalidAddress(contract_address.to_string()))?;

        tracing::info!(contract = %address, "Contract gateway configured");

        Ok(Self { endpoint, address })
    }

    /// The contract address as served to wallet clients.
    pub fn address(&self) -> String {
        self.address.to_string()
    }

    pub async fn campaign_count(&self) -> Result<u64> {
        let provider = ProviderBuilder::new().connect_http(self.endpoint.clone());
        let contract = ICrowdfund::new(self.address, provider);

        let count = contract
            .campaignCount()
            .call()
            .await
            .map_err(|e| GatewayError::Rpc(e.to_string()))?;

        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }

    pub async fn get_campaign(&self, id: u64) -> Result<Campaign> {
        let provider = ProviderBuilder::new().connect_http(self.endpoint.clone());
        let contract = ICrowdfund::new(self.address, provider);

        let c = contract
            .getCampaign(U256::from(id))
            .call()
            .await
            .map_err(|e| GatewayError::Rpc(e.to_string()))?;

        Ok(Campaign {
            id,
            creator: c.creator.to_string(),
            title: c.title,
            description: c.description,
            image_url: c.imageUrl,
            funding_goal: wei_to_ether(c.fundingGoal),
            current_amount: wei_to_ether(c.currentAmount),
            deadline: u64::try_from(c.deadline).unwrap_or(u64::MAX),
            claimed: c.claimed,
            exists: c.exists,
        })
    }

    pub async fn list_campaigns(&self) -> Result<Vec<Campaign>> {
        let count = self.campaign_count().await?;

        let mut campaigns = Vec::with_capacity(count as usize);
        for id in 0..count {
            campaigns.push(self.get_campaign(id).await?);
        }

        Ok(campaigns)
    }

    pub async fn get_contribution(&self, campaign_id: u64, contributor: &str) -> Result<f64> {
        let contributor: Address = contributor
            .parse()
            .map_err(|_| GatewayError::InvalidAddress(contributor.to_string()))?;

        let provider = ProviderBuilder::new().connect_http(self.endpoint.clone());
        let contract = ICrowdfund::new(self.address, provider);

        let wei = contract
            .getContribution(U256::from(campaign_id), contributor)
            .call()
            .await
            .map_err(|e| GatewayError::Rpc(e.to_string()))?;

        Ok(wei_to_ether(wei))
    }
}
