//! Contribution mirror operations.
//!
//! Rows mirror on-chain contributions for fast querying; the contract
//! stays authoritative. `transaction_hash` is unique at the schema level,
//! which makes recording idempotent under client retries and concurrent
//! requests.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::Contribution;
use crate::{activity, user};

const CONTRIBUTION_COLUMNS: &str =
    "id, campaign_id, contributor_address, amount, transaction_hash, created_at";

/// Record a contribution, its user row, and its activity log entry in one
/// transaction.
///
/// A transaction hash that was already recorded is rejected and leaves the
/// store unchanged.
pub async fn record_contribution(
    pool: &SqlitePool,
    campaign_id: i64,
    contributor_address: &str,
    amount: f64,
    transaction_hash: &str,
) -> Result<Contribution> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO contributions (campaign_id, contributor_address, amount, transaction_hash)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(campaign_id)
    .bind(contributor_address)
    .bind(amount)
    .bind(transaction_hash)
    .execute(&mut *tx)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "Transaction",
                    id: transaction_hash.to_string(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    let contributor = user::get_or_create(&mut tx, contributor_address).await?;

    let payload = serde_json::json!({
        "amount": amount,
        "transaction_hash": transaction_hash,
    })
    .to_string();
    activity::insert_activity(&mut tx, contributor.id, "contribution", campaign_id, Some(&payload))
        .await?;

    let query = format!(
        "SELECT {CONTRIBUTION_COLUMNS}
         FROM contributions
         WHERE transaction_hash = ?"
    );
    let contribution = sqlx::query_as::<_, Contribution>(&query)
        .bind(transaction_hash)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(contribution)
}

/// List mirrored contributions for a campaign, newest first.
pub async fn list_for_campaign(pool: &SqlitePool, campaign_id: i64) -> Result<Vec<Contribution>> {
    let query = format!(
        "SELECT {CONTRIBUTION_COLUMNS}
         FROM contributions
         WHERE campaign_id = ?
         ORDER BY id DESC"
    );

    let rows = sqlx::query_as::<_, Contribution>(&query)
        .bind(campaign_id)
        .fetch_all(pool)
        .await?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    const CONTRIBUTOR: &str = "0x2345678901234567890123456789012345678901";
    const TX_HASH: &str =
        "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_record_creates_user_and_activity() {
        let db = test_db().await;

        let contribution = record_contribution(db.pool(), 0, CONTRIBUTOR, 1.25, TX_HASH)
            .await
            .unwrap();
        assert_eq!(contribution.campaign_id, 0);
        assert!((contribution.amount - 1.25).abs() < f64::EPSILON);

        let contributor = user::get_user_by_wallet(db.pool(), CONTRIBUTOR).await.unwrap();
        let activities = activity::list_for_user(db.pool(), contributor.id, 10)
            .await
            .unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].activity_type, "contribution");

        let payload: serde_json::Value =
            serde_json::from_str(activities[0].activity_data.as_deref().unwrap()).unwrap();
        assert_eq!(payload["transaction_hash"], serde_json::json!(TX_HASH));
    }

    #[tokio::test]
    async fn test_duplicate_hash_rejected_without_side_effects() {
        let db = test_db().await;

        record_contribution(db.pool(), 1, CONTRIBUTOR, 0.5, TX_HASH)
            .await
            .unwrap();

        let result = record_contribution(db.pool(), 1, CONTRIBUTOR, 0.5, TX_HASH).await;
        assert!(matches!(result, Err(DatabaseError::AlreadyExists { .. })));

        // Exactly one mirror row and one activity entry survive.
        let rows = list_for_campaign(db.pool(), 1).await.unwrap();
        assert_eq!(rows.len(), 1);
        let contributor = user::get_user_by_wallet(db.pool(), CONTRIBUTOR).await.unwrap();
        let activities = activity::list_for_user(db.pool(), contributor.id, 10)
            .await
            .unwrap();
        assert_eq!(activities.len(), 1);
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let db = test_db().await;

        let other_hash = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";
        record_contribution(db.pool(), 2, CONTRIBUTOR, 0.1, TX_HASH)
            .await
            .unwrap();
        record_contribution(db.pool(), 2, CONTRIBUTOR, 0.2, other_hash)
            .await
            .unwrap();

        let rows = list_for_campaign(db.pool(), 2).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].transaction_hash, other_hash);
    }
}
