//! Application error type and its HTTP rendering.
//!
//! Every failure that reaches a handler is an [`AppError`]. Each variant
//! carries its own status code; handlers return `Result<_, AppError>` and the
//! [`IntoResponse`] impl turns the error into the JSON error envelope:
//!
//! ```json
//! { "status": "error", "message": "character is already in favorites" }
//! ```
//!
//! [`AppError::MethodNotAllowed`] is the one exception and renders as a plain
//! text body.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Fallback message used when no more specific message is available.
pub const GENERIC_MESSAGE: &str = "something went wrong.";

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: &'static str,
    message: &'a str,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed identifier in the request.
    #[error("{message}")]
    Validation { message: String },

    /// Favorite already present on add, or absent on remove.
    #[error("{message}")]
    Conflict { message: String },

    /// Upstream API unreachable, non-success status, or unusable payload.
    #[error("{message}")]
    Upstream { message: String },

    /// Unexpected failure in the favorites database.
    #[error("{message}")]
    Store { message: String },

    #[error("{message}")]
    MethodNotAllowed { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
        }
    }

    /// HTTP status carried by this error.
    ///
    /// Conflicts are reported as 400, not 409: the client asked for a state
    /// change that does not apply to the current favorites.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::Conflict { .. } => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } | AppError::Store { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    /// Human-readable message sent to the client.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation { message }
            | AppError::Conflict { message }
            | AppError::Upstream { message }
            | AppError::Store { message }
            | AppError::MethodNotAllowed { message } => message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error = match self {
            AppError::MethodNotAllowed { message } => return (status, message).into_response(),
            other => other,
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %error, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %error, "Request rejected");
        }

        let message = if error.message().is_empty() {
            GENERIC_MESSAGE
        } else {
            error.message()
        };

        let body = ErrorBody {
            status: "error",
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::store(format!("Database error: {}", e))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}
