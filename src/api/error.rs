use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::tmdb::CatalogError;

/// Transport-level failure taxonomy: upstream unavailable (503 with the
/// provider detail), bad request shape (400), anything else a generic 500.
/// LLM failures never reach this layer; they degrade to the fallback.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("External API error: {0}")]
    Unavailable(String),
    #[error("Internal server error")]
    Internal,
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Unavailable(detail) => ApiError::Unavailable(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("internal error surfaced to client");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_maps_to_unavailable() {
        let err: ApiError = CatalogError::Unavailable("connection refused".into()).into();
        assert!(matches!(err, ApiError::Unavailable(_)));
        assert_eq!(err.to_string(), "External API error: connection refused");
    }
}
