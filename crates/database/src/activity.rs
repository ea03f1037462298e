//! Append-only user activity log.
//!
//! Entries are written as a side effect of comment and contribution
//! writes, inside the same transaction, and are never updated or deleted.

use sqlx::{SqliteConnection, SqlitePool};

use crate::models::UserActivity;
use crate::Result;

/// Append an activity entry on an open transaction connection.
pub(crate) async fn insert_activity(
    conn: &mut SqliteConnection,
    user_id: i64,
    activity_type: &str,
    campaign_id: i64,
    activity_data: Option<&str>,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO user_activities (user_id, activity_type, campaign_id, activity_data)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(activity_type)
    .bind(campaign_id)
    .bind(activity_data)
    .execute(conn)
    .await?;

    Ok(())
}

/// Get recent activity entries for a user, newest first.
pub async fn list_for_user(
    pool: &SqlitePool,
    user_id: i64,
    limit: i64,
) -> Result<Vec<UserActivity>> {
    let rows = sqlx::query_as::<_, UserActivity>(
        r#"
        SELECT id, user_id, activity_type, campaign_id, activity_data, created_at
        FROM user_activities
        WHERE user_id = ?
        ORDER BY id DESC
        LIMIT ?
        "#,
    )
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
