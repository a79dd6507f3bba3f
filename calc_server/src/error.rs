//! Error handling for the HTTP service
//!
//! Calculation errors from `calc_core` are reported as 422 with their error
//! code; configuration and internal failures are 500 with a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use calc_core::errors::CalcError;
use serde_json::json;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Input rejected by calc_core validation
    #[error(transparent)]
    Calc(#[from] CalcError),

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    pub fn config(msg: impl Into<String>) -> Self {
        ApiError::Config(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Calc(err) if err.is_client_error() => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Calc(_) | ApiError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Calc(err) => err.error_code(),
            ApiError::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(json!({
            "error": message,
            "code": self.error_code(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}
