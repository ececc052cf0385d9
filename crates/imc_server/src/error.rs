//! API error type and its JSON rendering.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use imc_core::ImcError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body returned for every failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `false`
    pub success: bool,
    /// Human-readable reason
    pub error: String,
}

/// Errors surfaced by the HTTP handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Weight or height rejected, or the body could not be read
    #[error("{0}")]
    InvalidInput(String),

    /// Anything unexpected
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ImcError> for ApiError {
    fn from(err: ImcError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Turn a handler panic into a `500` JSON response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    ApiError::Internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> ErrorResponse {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_invalid_input_is_400() {
        let err = ApiError::from(ImcError::invalid_input("Peso deve ser maior que zero"));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_of(response).await;
        assert!(!body.success);
        assert_eq!(body.error, "Peso deve ser maior que zero");
    }

    #[tokio::test]
    async fn test_internal_is_500_with_prefix() {
        let response = ApiError::Internal("lookup failed".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_of(response).await;
        assert!(!body.success);
        assert_eq!(body.error, "internal error: lookup failed");
    }

    #[tokio::test]
    async fn test_handle_panic_extracts_message() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await.error, "internal error: boom");

        let response = handle_panic(Box::new(String::from("owned boom")));
        assert_eq!(body_of(response).await.error, "internal error: owned boom");

        let response = handle_panic(Box::new(42_u32));
        assert_eq!(body_of(response).await.error, "internal error: unknown panic");
    }
}
