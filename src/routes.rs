//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/categories`, `/questions`, `/search`, `/quizzes` - Trivia API
//! - `GET /health` - Health check
//! - unsupported method on a known path - 405 error envelope
//! - anything else - 404 error envelope
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, fixed allow-headers/allow-methods on every response
//! - **Panic recovery** - Panics render as the 500 error envelope
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, method_not_allowed_handler, not_found_handler};
use crate::api::middleware::{cors, panic, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the router with all routes and middleware, without path
/// normalization.
pub fn api_router(state: AppState) -> Router {
    api::routes::routes()
        .route("/health", get(health_handler))
        .method_not_allowed_fallback(method_not_allowed_handler)
        .fallback(not_found_handler)
        .with_state(state)
        .layer(panic::layer())
        .layer(cors::layer())
        .layer(cors::allow_headers_layer())
        .layer(cors::allow_methods_layer())
        .layer(tracing::layer())
}

/// Constructs the application router, trimming trailing slashes before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
