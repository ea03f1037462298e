//! Comment routes.
//!
//! Threads are one level deep by construction: the listing returns
//! top-level comments each carrying its ordered reply list, and the write
//! path rejects replies to replies.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use database::validation::validate_wallet_address;
use database::{campaign, comment, CommentWithAuthor};

use crate::error::{ApiError, Result};
use crate::state::AppState;

/// Request to create a comment or reply.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub wallet_address: Option<String>,
    pub content: Option<String>,
    pub parent_id: Option<i64>,
}

/// Public author fields attached to every comment.
#[derive(Debug, Serialize)]
pub struct CommentAuthor {
    pub id: i64,
    pub wallet_address: String,
    pub username: Option<String>,
    pub profile_image: Option<String>,
}

/// A reply, or a freshly created comment.
#[derive(Debug, Serialize)]
pub struct CommentDetail {
    pub id: i64,
    pub content: String,
    pub user: CommentAuthor,
    pub created_at: String,
}

/// A top-level comment with its ordered replies.
#[derive(Debug, Serialize)]
pub struct CommentThread {
    pub id: i64,
    pub content: String,
    pub user: CommentAuthor,
    pub created_at: String,
    pub replies: Vec<CommentDetail>,
}

/// Response for the comment listing.
#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub success: bool,
    pub comments: Vec<CommentThread>,
}

/// Response for a created comment.
#[derive(Debug, Serialize)]
pub struct CreateCommentResponse {
    pub success: bool,
    pub comment: CommentDetail,
}

/// List comments for a campaign, replies nested one level deep.
pub async fn list_comments(
    State(state): State<AppState>,
    Path(chain_id): Path<i64>,
) -> Result<Json<CommentListResponse>> {
    let campaign = campaign::get_by_chain_id(state.db.pool(), chain_id).await?;
    let rows = comment::list_for_campaign(state.db.pool(), campaign.id).await?;

    Ok(Json(CommentListResponse {
        success: true,
        comments: build_threads(rows),
    }))
}

/// Create a comment and its activity log entry.
pub async fn create_comment(
    State(state): State<AppState>,
    Path(chain_id): Path<i64>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<Json<CreateCommentResponse>> {
    let wallet_address = req
        .wallet_address
        .as_deref()
        .filter(|w| !w.is_empty())
        .ok_or_else(|| {
            ApiError::BadRequest("Wallet address and content are required".to_string())
        })?;
    let content = req.content.as_deref().filter(|c| !c.is_empty()).ok_or_else(|| {
        ApiError::BadRequest("Wallet address and content are required".to_string())
    })?;
    validate_wallet_address(wallet_address)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let campaign = campaign::get_by_chain_id(state.db.pool(), chain_id).await?;
    let row = comment::create_comment(
        state.db.pool(),
        campaign.id,
        chain_id,
        wallet_address,
        content,
        req.parent_id,
    )
    .await?;

    Ok(Json(CreateCommentResponse {
        success: true,
        comment: detail(row),
    }))
}

/// Partition joined rows into top-level threads with nested replies.
///
/// Rows arrive in creation order and a parent always precedes its
/// replies, so a single pass suffices.
fn build_threads(rows: Vec<CommentWithAuthor>) -> Vec<CommentThread> {
    let mut threads: Vec<CommentThread> = Vec::new();
    let mut index: HashMap<i64, usize> = HashMap::new();

    for row in rows {
        match row.parent_id {
            None => {
                index.insert(row.id, threads.len());
                threads.push(CommentThread {
                    id: row.id,
                    user: author(&row),
                    content: row.content,
                    created_at: row.created_at,
                    replies: Vec::new(),
                });
            }
            Some(parent_id) => {
                if let Some(&slot) = index.get(&parent_id) {
                    threads[slot].replies.push(detail(row));
                }
            }
        }
    }

    threads
}

fn author(row: &CommentWithAuthor) -> CommentAuthor {
    CommentAuthor {
        id: row.user_id,
        wallet_address: row.wallet_address.clone(),
        username: row.username.clone(),
        profile_image: row.profile_image.clone(),
    }
}

fn detail(row: CommentWithAuthor) -> CommentDetail {
    CommentDetail {
        user: author(&row),
        id: row.id,
        content: row.content,
        created_at: row.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use database::campaign::MetadataPatch;
    use database::Database;
    use gateway::Gateway;

    const AUTHOR: &str = "0x1234567890123456789012345678901234567890";
    const REPLIER: &str = "0x2345678901234567890123456789012345678901";

    async fn test_state() -> AppState {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        AppState::new(db, Gateway::fixture())
    }

    async fn seed_campaign(state: &AppState, chain_id: i64) {
        campaign::upsert_metadata(
            state.db.pool(),
            chain_id,
            AUTHOR,
            &MetadataPatch {
                title: Some("Test campaign"),
                ..MetadataPatch::default()
            },
        )
        .await
        .unwrap();
    }

    fn request(wallet: &str, content: &str, parent_id: Option<i64>) -> CreateCommentRequest {
        CreateCommentRequest {
            wallet_address: Some(wallet.to_string()),
            content: Some(content.to_string()),
            parent_id,
        }
    }

    #[tokio::test]
    async fn test_comments_on_unknown_campaign_are_404() {
        let state = test_state().await;

        let err = list_comments(State(state.clone()), Path(1)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = create_comment(State(state), Path(1), Json(request(AUTHOR, "hi", None)))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_content_is_400() {
        let state = test_state().await;
        seed_campaign(&state, 1).await;

        let req = CreateCommentRequest {
            wallet_address: Some(AUTHOR.to_string()),
            content: None,
            parent_id: None,
        };
        let err = create_comment(State(state), Path(1), Json(req))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_thread_listing_nests_replies() {
        let state = test_state().await;
        seed_campaign(&state, 1).await;

        let Json(created) = create_comment(
            State(state.clone()),
            Path(1),
            Json(request(AUTHOR, "first", None)),
        )
        .await
        .unwrap();
        create_comment(
            State(state.clone()),
            Path(1),
            Json(request(REPLIER, "reply", Some(created.comment.id))),
        )
        .await
        .unwrap();
        create_comment(
            State(state.clone()),
            Path(1),
            Json(request(AUTHOR, "second", None)),
        )
        .await
        .unwrap();

        let Json(response) = list_comments(State(state), Path(1)).await.unwrap();
        assert_eq!(response.comments.len(), 2);
        assert_eq!(response.comments[0].content, "first");
        assert_eq!(response.comments[0].replies.len(), 1);
        assert_eq!(response.comments[0].replies[0].content, "reply");
        assert_eq!(response.comments[0].replies[0].user.wallet_address, REPLIER);
        assert_eq!(response.comments[1].content, "second");
        assert!(response.comments[1].replies.is_empty());
    }

    #[tokio::test]
    async fn test_bad_parent_is_400() {
        let state = test_state().await;
        seed_campaign(&state, 1).await;

        let err = create_comment(
            State(state),
            Path(1),
            Json(request(AUTHOR, "orphan", Some(123))),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
