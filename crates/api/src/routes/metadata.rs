//! Off-chain campaign metadata routes.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use database::campaign::{self, MetadataPatch};
use database::validation::validate_wallet_address;
use database::CampaignMetadata;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Request to create or update campaign metadata.
///
/// `chain_id` travels as an Option so presence can be checked without
/// confusing the valid id zero with "absent".
#[derive(Debug, Deserialize)]
pub struct UpsertMetadataRequest {
    pub chain_id: Option<i64>,
    pub wallet_address: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub website: Option<String>,
    pub social_links: Option<String>,
}

/// Summary returned from an upsert.
#[derive(Debug, Serialize)]
pub struct MetadataSummary {
    pub id: i64,
    pub chain_id: i64,
    pub title: Option<String>,
}

/// Response for an upsert.
#[derive(Debug, Serialize)]
pub struct UpsertMetadataResponse {
    pub success: bool,
    pub campaign: MetadataSummary,
}

/// Full metadata returned from a lookup.
#[derive(Debug, Serialize)]
pub struct MetadataDetail {
    pub id: i64,
    pub chain_id: i64,
    pub creator_id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
    pub website: Option<String>,
    pub social_links: Option<String>,
    pub updates: Option<String>,
    pub created_at: String,
}

/// Response for a lookup.
#[derive(Debug, Serialize)]
pub struct GetMetadataResponse {
    pub success: bool,
    pub campaign: MetadataDetail,
}

/// Create or patch the metadata row for a chain id.
pub async fn upsert_metadata(
    State(state): State<AppState>,
    Json(req): Json<UpsertMetadataRequest>,
) -> Result<Json<UpsertMetadataResponse>> {
    // Zero is a valid chain id; only absence is rejected.
    let chain_id = req.chain_id.ok_or_else(|| {
        ApiError::BadRequest("Chain ID and wallet address are required".to_string())
    })?;
    if chain_id < 0 {
        return Err(ApiError::BadRequest(
            "Chain ID must be non-negative".to_string(),
        ));
    }
    let wallet_address = req
        .wallet_address
        .as_deref()
        .filter(|w| !w.is_empty())
        .ok_or_else(|| {
            ApiError::BadRequest("Chain ID and wallet address are required".to_string())
        })?;
    validate_wallet_address(wallet_address)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let patch = MetadataPatch {
        title: req.title.as_deref(),
        description: req.description.as_deref(),
        image_url: req.image_url.as_deref(),
        category: req.category.as_deref(),
        tags: req.tags.as_deref(),
        website: req.website.as_deref(),
        social_links: req.social_links.as_deref(),
    };
    let campaign =
        campaign::upsert_metadata(state.db.pool(), chain_id, wallet_address, &patch).await?;

    Ok(Json(UpsertMetadataResponse {
        success: true,
        campaign: MetadataSummary {
            id: campaign.id,
            chain_id: campaign.chain_id,
            title: campaign.title,
        },
    }))
}

/// Get campaign metadata by chain id.
pub async fn get_metadata(
    State(state): State<AppState>,
    Path(chain_id): Path<i64>,
) -> Result<Json<GetMetadataResponse>> {
    let campaign = campaign::get_by_chain_id(state.db.pool(), chain_id).await?;

    Ok(Json(GetMetadataResponse {
        success: true,
        campaign: detail(campaign),
    }))
}

fn detail(campaign: CampaignMetadata) -> MetadataDetail {
    MetadataDetail {
        id: campaign.id,
        chain_id: campaign.chain_id,
        creator_id: campaign.creator_id,
        title: campaign.title,
        description: campaign.description,
        image_url: campaign.image_url,
        category: campaign.category,
        tags: campaign.tags,
        website: campaign.website,
        social_links: campaign.social_links,
        updates: campaign.updates,
        created_at: campaign.created_at,
    }
}
