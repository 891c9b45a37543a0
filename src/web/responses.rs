use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Canonical JSON payload for error responses.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Acknowledgement returned by the session endpoints.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct Success {
    pub success: bool,
}

impl Success {
    pub fn ok() -> Json<Self> {
        Json(Self { success: true })
    }
}

/// Failures surfaced by the JSON endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required server-side settings are missing.
    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Authentication(String),

    /// Anything that escaped the handler's own checks.
    #[error("{message}: {details}")]
    Unexpected { message: String, details: String },
}

impl ApiError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    pub fn unexpected(message: impl Into<String>, details: impl ToString) -> Self {
        Self::Unexpected {
            message: message.into(),
            details: details.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Configuration(_) | ApiError::Unexpected { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Authentication(_) => StatusCode::UNAUTHORIZED,
        }
    }

    pub fn body(&self) -> ErrorBody {
        match self {
            ApiError::Configuration(message)
            | ApiError::Validation(message)
            | ApiError::Authentication(message) => ErrorBody {
                error: message.clone(),
                details: None,
            },
            ApiError::Unexpected { message, details } => ErrorBody {
                error: message.clone(),
                details: Some(details.clone()),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(err = %self, %status, "request failed");
        }
        (status, Json(self.body())).into_response()
    }
}
