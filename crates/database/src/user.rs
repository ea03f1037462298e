//! User account operations.
//!
//! Users are created on first reference (profile submission, comment, or
//! contribution) and never deleted. `wallet_address` is unique at the
//! schema level.

use sqlx::{SqliteConnection, SqlitePool};

use crate::error::{DatabaseError, Result};
use crate::models::User;

const USER_COLUMNS: &str =
    "id, wallet_address, username, email, profile_image, bio, created_at, updated_at";

/// Optional profile fields for an upsert.
///
/// `None` means "not supplied": the stored value is kept. Supplied fields
/// overwrite the stored value.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserPatch<'a> {
    pub username: Option<&'a str>,
    pub email: Option<&'a str>,
    pub profile_image: Option<&'a str>,
    pub bio: Option<&'a str>,
}

/// Create a user on first sight of a wallet address, or patch the
/// supplied fields of the existing row.
pub async fn upsert_user(
    pool: &SqlitePool,
    wallet_address: &str,
    patch: &UserPatch<'_>,
) -> Result<User> {
    sqlx::query(
        r#"
        INSERT INTO users (wallet_address, username, email, profile_image, bio)
        VALUES (?, ?, ?, ?, ?)
        ON CONFLICT(wallet_address) DO UPDATE SET
            username = COALESCE(excluded.username, users.username),
            email = COALESCE(excluded.email, users.email),
            profile_image = COALESCE(excluded.profile_image, users.profile_image),
            bio = COALESCE(excluded.bio, users.bio),
            updated_at = datetime('now')
        "#,
    )
    .bind(wallet_address)
    .bind(patch.username)
    .bind(patch.email)
    .bind(patch.profile_image)
    .bind(patch.bio)
    .execute(pool)
    .await?;

    get_user_by_wallet(pool, wallet_address).await
}

/// Get a user by wallet address.
pub async fn get_user_by_wallet(pool: &SqlitePool, wallet_address: &str) -> Result<User> {
    let query = format!(
        "SELECT {USER_COLUMNS}
         FROM users
         WHERE wallet_address = ?"
    );

    sqlx::query_as::<_, User>(&query)
        .bind(wallet_address)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound {
            entity: "User",
            id: wallet_address.to_string(),
        })
}

/// Get a user by wallet address on an open transaction connection,
/// creating a bare row if the address is unseen.
///
/// Used by multi-table writes so the user row commits or rolls back
/// together with the rest of the write.
pub(crate) async fn get_or_create(
    conn: &mut SqliteConnection,
    wallet_address: &str,
) -> Result<User> {
    let query = format!(
        "SELECT {USER_COLUMNS}
         FROM users
         WHERE wallet_address = ?"
    );

    if let Some(user) = sqlx::query_as::<_, User>(&query)
        .bind(wallet_address)
        .fetch_optional(&mut *conn)
        .await?
    {
        return Ok(user);
    }

    sqlx::query(
        r#"
        INSERT INTO users (wallet_address)
        VALUES (?)
        "#,
    )
    .bind(wallet_address)
    .execute(&mut *conn)
    .await?;

    sqlx::query_as::<_, User>(&query)
        .bind(wallet_address)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| DatabaseError::NotFound {
            entity: "User",
            id: wallet_address.to_string(),
        })
}

/// Count total users.
pub async fn count_users(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM users
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}
