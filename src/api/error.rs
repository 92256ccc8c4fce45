use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::dispatch::DispatchError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("All API endpoints failed")]
    UpstreamUnavailable { details: String },
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        ApiError::UpstreamUnavailable {
            details: err.last_error,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::InvalidRequest(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": message })),
            )
                .into_response(),
            ApiError::UpstreamUnavailable { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "All API endpoints failed",
                    "details": details,
                })),
            )
                .into_response(),
        }
    }
}
