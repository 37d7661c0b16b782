//! Cross-origin headers.
//!
//! Any origin may call the API. Every response, not only preflight answers,
//! carries the fixed allow-headers and allow-methods lists the browser client
//! expects.

use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

/// Allowed request headers, including the client's custom `true` marker.
pub const ALLOWED_HEADERS: &str = "Content-Type,Authorization,true";

/// Allowed request methods.
pub const ALLOWED_METHODS: &str = "GET,PATCH,POST,DELETE,OPTIONS";

/// Answers preflight requests and sets `Access-Control-Allow-Origin: *`.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("true"),
        ])
}

/// Sets `Access-Control-Allow-Headers` on every response.
pub fn allow_headers_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    )
}

/// Sets `Access-Control-Allow-Methods` on every response.
pub fn allow_methods_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    )
}
