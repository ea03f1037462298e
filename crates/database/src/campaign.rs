//! Off-chain campaign metadata operations.
//!
//! Metadata rows are keyed by the on-chain campaign id and created lazily
//! on the first submission for that id. Later submissions patch only the
//! fields they supply.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::CampaignMetadata;
use crate::user;

const CAMPAIGN_COLUMNS: &str = "id, chain_id, creator_id, title, description, image_url, \
     category, tags, website, social_links, updates, created_at, updated_at";

/// Optional descriptive fields for a metadata upsert.
///
/// `None` means "not supplied": the stored value is kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataPatch<'a> {
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    pub image_url: Option<&'a str>,
    pub category: Option<&'a str>,
    pub tags: Option<&'a str>,
    pub website: Option<&'a str>,
    pub social_links: Option<&'a str>,
}

/// Create or patch the metadata row for a chain id.
///
/// Auto-creates the submitting user. The user row, and the metadata row,
/// commit atomically. The creator recorded on first creation is kept on
/// later patches.
pub async fn upsert_metadata(
    pool: &SqlitePool,
    chain_id: i64,
    wallet_address: &str,
    patch: &MetadataPatch<'_>,
) -> Result<CampaignMetadata> {
    let mut tx = pool.begin().await?;

    let creator = user::get_or_create(&mut tx, wallet_address).await?;

    sqlx::query(
        r#"
        INSERT INTO campaigns
            (chain_id, creator_id, title, description, image_url, category,
             tags, website, social_links)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        ON CONFLICT(chain_id) DO UPDATE SET
            title = COALESCE(excluded.title, campaigns.title),
            description = COALESCE(excluded.description, campaigns.description),
            image_url = COALESCE(excluded.image_url, campaigns.image_url),
            category = COALESCE(excluded.category, campaigns.category),
            tags = COALESCE(excluded.tags, campaigns.tags),
            website = COALESCE(excluded.website, campaigns.website),
            social_links = COALESCE(excluded.social_links, campaigns.social_links),
            updated_at = datetime('now')
        "#,
    )
    .bind(chain_id)
    .bind(creator.id)
    .bind(patch.title)
    .bind(patch.description)
    .bind(patch.image_url)
    .bind(patch.category)
    .bind(patch.tags)
    .bind(patch.website)
    .bind(patch.social_links)
    .execute(&mut *tx)
    .await?;

    let query = format!(
        "SELECT {CAMPAIGN_COLUMNS}
         FROM campaigns
         WHERE chain_id = ?"
    );
    let campaign = sqlx::query_as::<_, CampaignMetadata>(&query)
        .bind(chain_id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(campaign)
}

/// Get campaign metadata by chain id.
pub async fn get_by_chain_id(pool: &SqlitePool, chain_id: i64) -> Result<CampaignMetadata> {
    let query = format!(
        "SELECT {CAMPAIGN_COLUMNS}
         FROM campaigns
         WHERE chain_id = ?"
    );

    sqlx::query_as::<_, CampaignMetadata>(&query)
        .bind(chain_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound {
            entity: "Campaign metadata",
            id: chain_id.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    const WALLET: &str = "0x1234567890123456789012345678901234567890";

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_upsert_creates_user_and_metadata() {
        let db = test_db().await;

        let patch = MetadataPatch {
            title: Some("Solar Kiln"),
            description: Some("A kiln powered by the sun"),
            ..MetadataPatch::default()
        };
        let campaign = upsert_metadata(db.pool(), 3, WALLET, &patch).await.unwrap();

        assert_eq!(campaign.chain_id, 3);
        assert_eq!(campaign.title.as_deref(), Some("Solar Kiln"));

        let creator = user::get_user_by_wallet(db.pool(), WALLET).await.unwrap();
        assert_eq!(campaign.creator_id, creator.id);
    }

    #[tokio::test]
    async fn test_chain_id_zero_is_valid() {
        let db = test_db().await;

        let patch = MetadataPatch {
            title: Some("Genesis"),
            ..MetadataPatch::default()
        };
        let campaign = upsert_metadata(db.pool(), 0, WALLET, &patch).await.unwrap();
        assert_eq!(campaign.chain_id, 0);

        let fetched = get_by_chain_id(db.pool(), 0).await.unwrap();
        assert_eq!(fetched.id, campaign.id);
    }

    #[tokio::test]
    async fn test_patch_keeps_unsupplied_fields() {
        let db = test_db().await;

        let patch = MetadataPatch {
            title: Some("Solar Kiln"),
            category: Some("energy"),
            ..MetadataPatch::default()
        };
        upsert_metadata(db.pool(), 7, WALLET, &patch).await.unwrap();

        let patch = MetadataPatch {
            website: Some("https://kiln.example"),
            ..MetadataPatch::default()
        };
        let campaign = upsert_metadata(db.pool(), 7, WALLET, &patch).await.unwrap();

        assert_eq!(campaign.title.as_deref(), Some("Solar Kiln"));
        assert_eq!(campaign.category.as_deref(), Some("energy"));
        assert_eq!(campaign.website.as_deref(), Some("https://kiln.example"));
    }

    #[tokio::test]
    async fn test_one_row_per_chain_id() {
        let db = test_db().await;

        let patch = MetadataPatch::default();
        let first = upsert_metadata(db.pool(), 5, WALLET, &patch).await.unwrap();
        let second = upsert_metadata(db.pool(), 5, WALLET, &patch).await.unwrap();
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_get_missing_metadata() {
        let db = test_db().await;
        let result = get_by_chain_id(db.pool(), 42).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }
}
