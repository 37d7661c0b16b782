mod common;

use axum::http::StatusCode;
use serde_json::json;

// ─── LIST ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_categories_success() {
    let server = common::make_server(common::seeded_store());

    let response = server.get("/categories").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "success": true,
        "categories": [
            {"id": 1, "type": "Science"},
            {"id": 2, "type": "Art"}
        ]
    }));
}

#[tokio::test]
async fn test_list_categories_empty() {
    let server = common::make_server(common::MemoryStore::new());

    let response = server.get("/categories").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["categories"], json!([]));
}

#[tokio::test]
async fn test_list_categories_storage_failure() {
    let store = common::seeded_store();
    store.fail_with("connection refused");
    let server = common::make_server(store);

    let response = server.get("/categories").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({
        "success": false,
        "error": 500,
        "message": "Oops! Something went wrong on our end: connection refused"
    }));
}

// ─── QUESTIONS BY CATEGORY ───────────────────────────────────────────────────

#[tokio::test]
async fn test_category_questions_filters_by_category() {
    let store = common::seeded_store();
    let q1 = store.add_question("What is the boiling point of water?", "100C", 1, 1);
    store.add_question("Who painted Guernica?", "Picasso", 2, 2);
    let server = common::make_server(store);

    let response = server.get("/categories/1/questions").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "questions": [{
            "id": q1,
            "question": "What is the boiling point of water?",
            "answer": "100C",
            "category": 1,
            "difficulty": 1
        }],
        "total_questions": 1,
        "current_category": 1
    }));
}

#[tokio::test]
async fn test_category_questions_unknown_category_is_empty() {
    let store = common::seeded_store();
    store.add_question("Q", "A", 1, 1);
    let server = common::make_server(store);

    let response = server.get("/categories/1000/questions").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["questions"], json!([]));
    assert_eq!(body["total_questions"], 0);
    assert_eq!(body["current_category"], 1000);
}

#[tokio::test]
async fn test_category_questions_zero_is_bad_request() {
    let server = common::make_server(common::seeded_store());

    let response = server.get("/categories/0/questions").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({
        "success": false,
        "error": 400,
        "message": "Category with ID: 0 is invalid."
    }));
}

#[tokio::test]
async fn test_category_questions_non_numeric_is_not_found() {
    let server = common::make_server(common::seeded_store());

    let response = server.get("/categories/science/questions").await;

    response.assert_status_not_found();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], 404);
}
