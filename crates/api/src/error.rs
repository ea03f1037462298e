//! Error types for the API layer.
//!
//! Every failure serializes to the `{"success": false, "error": ...}`
//! envelope with a status from {400, 404, 500}. Errors are surfaced to
//! the caller verbatim, never logged-and-suppressed.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use database::DatabaseError;
use gateway::GatewayError;

/// Errors that can occur while handling a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required field missing or malformed.
    #[error("{0}")]
    BadRequest(String),

    /// Store error; uniqueness conflicts map to 400, missing rows to 404.
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Gateway error; fixture misses map to 404, the rest to 500.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Database(DatabaseError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Database(DatabaseError::AlreadyExists { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Database(DatabaseError::InvalidReference { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Gateway(GatewayError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Request failed");
        }

        let body = serde_json::json!({
            "success": false,
            "error": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for request handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = ApiError::BadRequest("Wallet address is required".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = ApiError::Database(DatabaseError::NotFound {
            entity: "User",
            id: "0xabc".to_string(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = ApiError::Database(DatabaseError::AlreadyExists {
            entity: "Transaction",
            id: "0xdef".to_string(),
        });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = ApiError::Gateway(GatewayError::Rpc("execution reverted".to_string()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let err = ApiError::Gateway(GatewayError::NotFound { id: 7 });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }
}
