//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A user account, identified by wallet address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Wallet address ("0x" + 40 hex digits, case-sensitive).
    pub wallet_address: String,
    /// Optional display name, unique when set.
    pub username: Option<String>,
    /// Optional email address, unique when set.
    pub email: Option<String>,
    /// Profile image URL.
    pub profile_image: Option<String>,
    /// Free-text bio.
    pub bio: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

/// Off-chain metadata for an on-chain campaign.
///
/// Supplements the authoritative contract state with descriptive fields
/// the chain does not hold. Keyed by the on-chain campaign id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CampaignMetadata {
    /// Auto-incrementing ID.
    pub id: i64,
    /// On-chain campaign id. Zero is a valid id.
    pub chain_id: i64,
    /// Creator user row.
    pub creator_id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    /// Free-text tags, comma-separated.
    pub tags: Option<String>,
    pub website: Option<String>,
    /// JSON-encoded social media links.
    pub social_links: Option<String>,
    /// JSON-encoded update log.
    pub updates: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last update timestamp.
    pub updated_at: String,
}

/// A comment on a campaign, optionally a reply to a top-level comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Author user row.
    pub user_id: i64,
    /// Campaign metadata row (not the chain id).
    pub campaign_id: i64,
    /// Comment body.
    pub content: String,
    /// Parent comment for replies; replies nest one level only.
    pub parent_id: Option<i64>,
    /// Creation timestamp.
    pub created_at: String,
}

/// A comment joined with its author's public profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CommentWithAuthor {
    pub id: i64,
    pub content: String,
    pub parent_id: Option<i64>,
    pub created_at: String,
    pub user_id: i64,
    pub wallet_address: String,
    pub username: Option<String>,
    pub profile_image: Option<String>,
}

/// An append-only activity log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserActivity {
    /// Auto-incrementing ID.
    pub id: i64,
    /// User the activity belongs to.
    pub user_id: i64,
    /// Free-form activity tag, e.g. "comment" or "contribution".
    pub activity_type: String,
    /// On-chain id of the related campaign.
    pub campaign_id: i64,
    /// Opaque JSON payload.
    pub activity_data: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

/// An off-chain mirror of an on-chain contribution.
///
/// Best-effort cache for fast querying; the contract remains the source
/// of truth for funding amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Contribution {
    /// Auto-incrementing ID.
    pub id: i64,
    /// On-chain id of the funded campaign.
    pub campaign_id: i64,
    /// Contributor wallet address.
    pub contributor_address: String,
    /// Amount in ETH.
    pub amount: f64,
    /// Transaction hash ("0x" + 64 hex digits), globally unique.
    pub transaction_hash: String,
    /// Insertion timestamp.
    pub created_at: String,
}
