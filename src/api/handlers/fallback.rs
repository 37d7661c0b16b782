//! Handlers for unmatched routes and methods.

use crate::error::AppError;

/// Renders the 404 envelope for any path without a route.
pub async fn not_found_handler() -> AppError {
    AppError::route_not_found()
}

/// Renders the 405 envelope for a known path hit with an unsupported method.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::method_not_allowed()
}
