//! Contribution mirror routes.
//!
//! Contributions happen on-chain; this endpoint only records a mirror row
//! for fast querying after the client's transaction confirms.

use axum::extract::{Json, State};
use serde::{Deserialize, Serialize};

use database::contribution;
use database::validation::{validate_transaction_hash, validate_wallet_address};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Request to record an on-chain contribution.
///
/// `campaign_id` travels as an Option so the valid id zero is never read
/// as "absent".
#[derive(Debug, Deserialize)]
pub struct RecordContributionRequest {
    pub campaign_id: Option<i64>,
    pub contributor_address: Option<String>,
    pub amount: Option<f64>,
    pub transaction_hash: Option<String>,
}

/// The recorded mirror row.
#[derive(Debug, Serialize)]
pub struct ContributionView {
    pub id: i64,
    pub campaign_id: i64,
    pub contributor_address: String,
    pub amount: f64,
    pub transaction_hash: String,
    #[serde(rename = "timestamp")]
    pub created_at: String,
}

/// Response for a recorded contribution.
#[derive(Debug, Serialize)]
pub struct RecordContributionResponse {
    pub success: bool,
    pub contribution: ContributionView,
}

/// Record a contribution mirror row.
pub async fn record_contribution(
    State(state): State<AppState>,
    Json(req): Json<RecordContributionRequest>,
) -> Result<Json<RecordContributionResponse>> {
    let missing = || ApiError::BadRequest("Missing required fields".to_string());

    let campaign_id = req.campaign_id.ok_or_else(missing)?;
    if campaign_id < 0 {
        return Err(ApiError::BadRequest(
            "Campaign ID must be non-negative".to_string(),
        ));
    }
    let contributor_address = req
        .contributor_address
        .as_deref()
        .filter(|a| !a.is_empty())
        .ok_or_else(missing)?;
    let amount = req.amount.ok_or_else(missing)?;
    let transaction_hash = req
        .transaction_hash
        .as_deref()
        .filter(|h| !h.is_empty())
        .ok_or_else(missing)?;

    validate_wallet_address(contributor_address)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;
    validate_transaction_hash(transaction_hash)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let contribution = contribution::record_contribution(
        state.db.pool(),
        campaign_id,
        contributor_address,
        amount,
        transaction_hash,
    )
    .await?;

    Ok(Json(RecordContributionResponse {
        success: true,
        contribution: ContributionView {
            id: contribution.id,
            campaign_id: contribution.campaign_id,
            contributor_address: contribution.contributor_address,
            amount: contribution.amount,
            transaction_hash: contribution.transaction_hash,
            created_at: contribution.created_at,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use database::Database;
    use gateway::Gateway;

    const CONTRIBUTOR: &str = "0x2345678901234567890123456789012345678901";
    const TX_HASH: &str =
        "0xcccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccc";

    async fn test_state() -> AppState {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        AppState::new(db, Gateway::fixture())
    }

    fn request() -> RecordContributionRequest {
        RecordContributionRequest {
            campaign_id: Some(0),
            contributor_address: Some(CONTRIBUTOR.to_string()),
            amount: Some(0.75),
            transaction_hash: Some(TX_HASH.to_string()),
        }
    }

    #[tokio::test]
    async fn test_record_campaign_zero() {
        let state = test_state().await;

        let Json(response) = record_contribution(State(state), Json(request()))
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.contribution.campaign_id, 0);
        assert_eq!(response.contribution.transaction_hash, TX_HASH);
    }

    #[tokio::test]
    async fn test_duplicate_hash_is_400() {
        let state = test_state().await;

        record_contribution(State(state.clone()), Json(request()))
            .await
            .unwrap();
        let err = record_contribution(State(state.clone()), Json(request()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        // The store is unchanged.
        let rows = contribution::list_for_campaign(state.db.pool(), 0)
            .await
            .unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_fields_are_400() {
        let state = test_state().await;

        let mut req = request();
        req.amount = None;
        let err = record_contribution(State(state.clone()), Json(req))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let mut req = request();
        req.campaign_id = None;
        let err = record_contribution(State(state), Json(req))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_hash_is_400() {
        let state = test_state().await;

        let mut req = request();
        req.transaction_hash = Some("0x1234".to_string());
        let err = record_contribution(State(state), Json(req))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
