//! Chain read-through routes.
//!
//! These handlers proxy reads to the contract gateway and never touch the
//! off-chain store. In fixture mode they serve the gateway's canned data
//! so the rest of the system stays testable offline.

use axum::extract::{Path, State};
use axum::Json;
use gateway::Campaign;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

/// Response for the campaign list.
#[derive(Debug, Serialize)]
pub struct CampaignListResponse {
    pub success: bool,
    pub campaigns: Vec<Campaign>,
}

/// Response for a single campaign.
#[derive(Debug, Serialize)]
pub struct CampaignResponse {
    pub success: bool,
    pub campaign: Campaign,
}

/// Response for a contribution lookup.
#[derive(Debug, Serialize)]
pub struct ContributionResponse {
    pub success: bool,
    pub contribution: f64,
}

/// Response for contract information.
#[derive(Debug, Serialize)]
pub struct ContractResponse {
    pub success: bool,
    pub address: String,
    pub abi: serde_json::Value,
}

/// List all campaigns on the ledger.
pub async fn list_campaigns(State(state): State<AppState>) -> Result<Json<CampaignListResponse>> {
    let campaigns = state.gateway.list_campaigns().await?;
    Ok(Json(CampaignListResponse {
        success: true,
        campaigns,
    }))
}

/// Get a single campaign by chain id.
pub async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<CampaignResponse>> {
    let campaign = state.gateway.get_campaign(id).await?;
    Ok(Json(CampaignResponse {
        success: true,
        campaign,
    }))
}

/// Get the contribution of one address to one campaign.
pub async fn get_contribution(
    State(state): State<AppState>,
    Path((id, address)): Path<(u64, String)>,
) -> Result<Json<ContributionResponse>> {
    let contribution = state.gateway.get_contribution(id, &address).await?;
    Ok(Json(ContributionResponse {
        success: true,
        contribution,
    }))
}

/// Get the contract address and ABI for client-side transactions.
pub async fn contract_info(State(state): State<AppState>) -> Result<Json<ContractResponse>> {
    let info = state.gateway.contract_info()?;
    Ok(Json(ContractResponse {
        success: true,
        address: info.address,
        abi: info.abi,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use axum::http::StatusCode;
    use database::Database;
    use gateway::Gateway;

    async fn test_state() -> AppState {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        AppState::new(db, Gateway::fixture())
    }

    #[tokio::test]
    async fn test_fixture_campaign_list() {
        let state = test_state().await;

        let Json(response) = list_campaigns(State(state)).await.unwrap();
        assert!(response.success);
        assert_eq!(response.campaigns.len(), 2);
        assert_eq!(response.campaigns[0].id, 0);
        assert_eq!(response.campaigns[1].id, 1);
        assert_eq!(
            response.campaigns[0].creator,
            "0x1234567890123456789012345678901234567890"
        );
    }

    #[tokio::test]
    async fn test_fixture_unknown_campaign_is_404() {
        let state = test_state().await;

        let err = get_campaign(State(state), Path(5)).await.unwrap_err();
        assert!(matches!(err, ApiError::Gateway(_)));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_fixture_contribution_lookup() {
        let state = test_state().await;

        let Json(response) = get_contribution(
            State(state.clone()),
            Path((0, "0x1234567890123456789012345678901234567890".to_string())),
        )
        .await
        .unwrap();
        assert_eq!(response.contribution, 1.5);

        let Json(response) = get_contribution(
            State(state),
            Path((3, "0x9999999999999999999999999999999999999999".to_string())),
        )
        .await
        .unwrap();
        assert_eq!(response.contribution, 0.0);
    }

    #[tokio::test]
    async fn test_contract_info_serves_abi() {
        let state = test_state().await;

        let Json(response) = contract_info(State(state)).await.unwrap();
        assert!(response.success);
        assert_eq!(
            response.address,
            "0x8123d34f5b52e8852cda1accac646b34dd4c77b5"
        );
        assert!(response.abi.as_array().is_some_and(|abi| !abi.is_empty()));
    }
}
