mod common;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderName, HeaderValue, Method, Request, StatusCode};
use axum::routing::get;
use axum_test::TestServer;
use serde_json::json;
use tower::ServiceExt;
use trivia_api::api::middleware::panic;
use trivia_api::error::{METHOD_NOT_ALLOWED_MESSAGE, NOT_FOUND_MESSAGE};
use trivia_api::routes::app_router;

// ─── FALLBACK ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unknown_route_envelope() {
    let server = common::make_server(common::seeded_store());

    let response = server.get("/does/not/exist").await;

    response.assert_status_not_found();
    response.assert_json(&json!({
        "success": false,
        "error": 404,
        "message": NOT_FOUND_MESSAGE
    }));
}

#[tokio::test]
async fn test_non_numeric_question_id_is_not_found() {
    let server = common::make_server(common::seeded_store());

    let response = server.delete("/questions/abc").await;

    response.assert_status_not_found();
    assert_eq!(response.json::<serde_json::Value>()["error"], 404);
}

#[tokio::test]
async fn test_unsupported_method_envelope() {
    let server = common::make_server(common::seeded_store());

    let response = server.put("/questions").await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    response.assert_json(&json!({
        "success": false,
        "error": 405,
        "message": METHOD_NOT_ALLOWED_MESSAGE
    }));

    server
        .get("/questions/1")
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
    server
        .post("/health")
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let app = app_router(common::create_test_state(common::seeded_store()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/categories/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

// ─── CORS ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_cors_headers_on_regular_response() {
    let server = common::make_server(common::seeded_store());

    let response = server
        .get("/categories")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://localhost:3000"),
        )
        .await;

    response.assert_status_ok();
    let headers = response.headers();
    assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
    assert_eq!(
        headers.get("access-control-allow-headers").unwrap(),
        "Content-Type,Authorization,true"
    );
    assert_eq!(
        headers.get("access-control-allow-methods").unwrap(),
        "GET,PATCH,POST,DELETE,OPTIONS"
    );
}

#[tokio::test]
async fn test_cors_headers_on_error_response() {
    let server = common::make_server(common::seeded_store());

    let response = server.get("/nowhere").await;

    response.assert_status_not_found();
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-methods")
            .unwrap(),
        "GET,PATCH,POST,DELETE,OPTIONS"
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let server = common::make_server(common::seeded_store());

    let response = server
        .method(Method::OPTIONS, "/questions")
        .add_header(
            HeaderName::from_static("origin"),
            HeaderValue::from_static("http://localhost:3000"),
        )
        .add_header(
            HeaderName::from_static("access-control-request-method"),
            HeaderValue::from_static("POST"),
        )
        .await;

    response.assert_status_ok();
    let headers = response.headers();
    assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
    assert_eq!(
        headers.get("access-control-allow-headers").unwrap(),
        "Content-Type,Authorization,true"
    );
}

// ─── PANIC RECOVERY ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_panicking_handler_renders_internal_envelope() {
    async fn explode() -> &'static str {
        panic!("kaboom")
    }

    let app = Router::new().route("/explode", get(explode)).layer(panic::layer());
    let server = TestServer::new(app).unwrap();

    let response = server.get("/explode").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({
        "success": false,
        "error": 500,
        "message": "Oops! Something went wrong on our end: kaboom"
    }));
}

// ─── HEALTH ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_health_ok() {
    let server = common::make_server(common::seeded_store());

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
}

#[tokio::test]
async fn test_health_degraded() {
    let store = common::seeded_store();
    store.fail_with("database is down");
    let server = common::make_server(store);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "error");
}
