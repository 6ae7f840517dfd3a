//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gateway::GatewayError;
use thiserror::Error;

/// API-level error type that maps to HTTP responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The status message could not be fetched.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Gateway(err) => {
                tracing::error!(error = %err, "status query failed");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}
