//! Application error type and its JSON envelope.
//!
//! Every handler returns `Result<_, AppError>`. The error is rendered once, here,
//! into the uniform envelope:
//!
//! ```json
//! { "success": false, "error": 404, "message": "Question with ID: 7 is invalid." }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message used for unmatched routes and empty pages.
pub const NOT_FOUND_MESSAGE: &str = "The requested URL was not found on the server. \
If you entered the URL manually please check your spelling and try again.";

/// Message used when a route exists but does not accept the request method.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "The method is not allowed for the requested URL.";

/// Prefix of every 500 message; the fault detail follows it.
pub const INTERNAL_PREFIX: &str = "Oops! Something went wrong on our end: ";

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    MethodNotAllowed { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Not-found error carrying the generic "URL not found" description.
    pub fn route_not_found() -> Self {
        Self::not_found(NOT_FOUND_MESSAGE)
    }

    pub fn method_not_allowed() -> Self {
        Self::MethodNotAllowed {
            message: METHOD_NOT_ALLOWED_MESSAGE.to_string(),
        }
    }

    /// Internal error; `detail` is appended to [`INTERNAL_PREFIX`] when rendered.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            message: detail.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::Validation { message }
            | AppError::NotFound { message }
            | AppError::MethodNotAllowed { message } => message,
            AppError::Internal { message } => format!("{INTERNAL_PREFIX}{message}"),
        };

        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal(e.to_string())
    }
}
