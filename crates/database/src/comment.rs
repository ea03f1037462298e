//! Comment operations.
//!
//! Comments thread exactly one level deep: a top-level comment may carry
//! replies, a reply may not. Parent references are checked at write time,
//! which also makes cycles unrepresentable.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{Comment, CommentWithAuthor};
use crate::{activity, user};

const JOINED_COLUMNS: &str = "c.id, c.content, c.parent_id, c.created_at, \
     u.id AS user_id, u.wallet_address, u.username, u.profile_image";

/// Create a comment and its activity log entry in one transaction.
///
/// Auto-creates the author's user row. `campaign_id` is the metadata row
/// id; `chain_id` is the on-chain id recorded in the activity log.
pub async fn create_comment(
    pool: &SqlitePool,
    campaign_id: i64,
    chain_id: i64,
    wallet_address: &str,
    content: &str,
    parent_id: Option<i64>,
) -> Result<CommentWithAuthor> {
    let mut tx = pool.begin().await?;

    let author = user::get_or_create(&mut tx, wallet_address).await?;

    if let Some(parent_id) = parent_id {
        let parent = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, user_id, campaign_id, content, parent_id, created_at
            FROM comments
            WHERE id = ?
            "#,
        )
        .bind(parent_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DatabaseError::InvalidReference {
            entity: "Comment",
            reason: format!("parent comment {parent_id} does not exist"),
        })?;

        if parent.campaign_id != campaign_id {
            return Err(DatabaseError::InvalidReference {
                entity: "Comment",
                reason: format!("parent comment {parent_id} belongs to another campaign"),
            });
        }
        if parent.parent_id.is_some() {
            return Err(DatabaseError::InvalidReference {
                entity: "Comment",
                reason: format!("parent comment {parent_id} is itself a reply"),
            });
        }
    }

    let result = sqlx::query(
        r#"
        INSERT INTO comments (user_id, campaign_id, content, parent_id)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(author.id)
    .bind(campaign_id)
    .bind(content)
    .bind(parent_id)
    .execute(&mut *tx)
    .await?;
    let comment_id = result.last_insert_rowid();

    let payload = serde_json::json!({ "comment_id": comment_id }).to_string();
    activity::insert_activity(&mut tx, author.id, "comment", chain_id, Some(&payload)).await?;

    let query = format!(
        "SELECT {JOINED_COLUMNS}
         FROM comments c
         JOIN users u ON u.id = c.user_id
         WHERE c.id = ?"
    );
    let comment = sqlx::query_as::<_, CommentWithAuthor>(&query)
        .bind(comment_id)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(comment)
}

/// List all comments on a campaign with their authors, in creation order.
///
/// Returns top-level comments and replies interleaved; callers partition
/// on `parent_id`. Parents always precede their replies.
pub async fn list_for_campaign(
    pool: &SqlitePool,
    campaign_id: i64,
) -> Result<Vec<CommentWithAuthor>> {
    let query = format!(
        "SELECT {JOINED_COLUMNS}
         FROM comments c
         JOIN users u ON u.id = c.user_id
         WHERE c.campaign_id = ?
         ORDER BY c.id"
    );

    let rows = sqlx::query_as::<_, CommentWithAuthor>(&query)
        .bind(campaign_id)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}
