//! API route configuration.

use crate::api::handlers::{
    category_questions_handler, create_question_handler, delete_question_handler,
    list_categories_handler, list_questions_handler, quiz_handler, search_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// All trivia endpoints.
///
/// # Endpoints
///
/// - `GET    /categories`                 - List categories
/// - `GET    /categories/{cat_id}/questions` - Questions of one category
/// - `GET    /questions?page=N`           - One page of questions
/// - `POST   /questions`                  - Create a question
/// - `DELETE /questions/{q_id}`           - Delete a question
/// - `POST   /search`                     - Search question text
/// - `POST   /quizzes`                    - Next quiz question
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories_handler))
        .route(
            "/categories/{cat_id}/questions",
            get(category_questions_handler),
        )
        .route(
            "/questions",
            get(list_questions_handler).post(create_question_handler),
        )
        .route("/questions/{q_id}", delete(delete_question_handler))
        .route("/search", post(search_handler))
        .route("/quizzes", post(quiz_handler))
}
