//! Route handlers for the crowdfunding API.

pub mod campaigns;
pub mod comments;
pub mod contributions;
pub mod health;
pub mod metadata;
pub mod users;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Chain read-through
        .route("/api/campaigns", get(campaigns::list_campaigns))
        .route("/api/campaigns/:id", get(campaigns::get_campaign))
        .route(
            "/api/campaigns/:id/contribution/:address",
            get(campaigns::get_contribution),
        )
        .route("/api/contract", get(campaigns::contract_info))
        // Off-chain store
        .route("/api/users", post(users::upsert_user))
        .route("/api/users/:wallet_address", get(users::get_user))
        .route("/api/campaign-metadata", post(metadata::upsert_metadata))
        .route("/api/campaign-metadata/:chain_id", get(metadata::get_metadata))
        .route(
            "/api/campaigns/:id/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route("/api/contributions", post(contributions::record_contribution))
}
