//! User profile routes.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use database::user::{self, UserPatch};
use database::validation::validate_wallet_address;
use database::User;

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Request to create or update a user profile.
#[derive(Debug, Deserialize)]
pub struct UpsertUserRequest {
    pub wallet_address: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
}

/// Public user fields returned from an upsert.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub wallet_address: String,
    pub username: Option<String>,
    pub profile_image: Option<String>,
}

/// Response for an upsert.
#[derive(Debug, Serialize)]
pub struct UpsertUserResponse {
    pub success: bool,
    pub user: UserSummary,
}

/// Full profile returned from a lookup.
#[derive(Debug, Serialize)]
pub struct UserDetail {
    pub id: i64,
    pub wallet_address: String,
    pub username: Option<String>,
    pub email: Option<String>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
    pub created_at: String,
}

/// Response for a lookup.
#[derive(Debug, Serialize)]
pub struct GetUserResponse {
    pub success: bool,
    pub user: UserDetail,
}

/// Create a user or patch the supplied profile fields.
pub async fn upsert_user(
    State(state): State<AppState>,
    Json(req): Json<UpsertUserRequest>,
) -> Result<Json<UpsertUserResponse>> {
    let wallet_address = req
        .wallet_address
        .as_deref()
        .filter(|w| !w.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Wallet address is required".to_string()))?;
    validate_wallet_address(wallet_address)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let patch = UserPatch {
        username: req.username.as_deref(),
        email: req.email.as_deref(),
        profile_image: req.profile_image.as_deref(),
        bio: req.bio.as_deref(),
    };
    let user = user::upsert_user(state.db.pool(), wallet_address, &patch).await?;

    Ok(Json(UpsertUserResponse {
        success: true,
        user: UserSummary {
            id: user.id,
            wallet_address: user.wallet_address,
            username: user.username,
            profile_image: user.profile_image,
        },
    }))
}

/// Get a user profile by wallet address.
pub async fn get_user(
    State(state): State<AppState>,
    Path(wallet_address): Path<String>,
) -> Result<Json<GetUserResponse>> {
    let user = user::get_user_by_wallet(state.db.pool(), &wallet_address).await?;

    Ok(Json(GetUserResponse {
        success: true,
        user: detail(user),
    }))
}

fn detail(user: User) -> UserDetail {
    UserDetail {
        id: user.id,
        wallet_address: user.wallet_address,
        username: user.username,
        email: user.email,
        profile_image: user.profile_image,
        bio: user.bio,
        created_at: user.created_at,
    }
}
