//! Handlers for question listing, creation and deletion.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::question::{
    CreateQuestionRequest, CreateQuestionResponse, DeleteQuestionResponse, QuestionPageResponse,
    QuestionView, category_map, question_views,
};
use crate::api::extract::{ApiJson, ApiPath};
use crate::error::AppError;
use crate::state::AppState;

/// Returns one page of questions with the category map.
///
/// # Endpoint
///
/// `GET /questions?page=N`
///
/// Pages hold 10 questions ordered by id. `page` defaults to 1.
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "total_questions": 19,
///   "categories": {"1": "Science", "2": "Art"},
///   "questions": [{"id": 1, "question": "...", "answer": "...", "category": 1, "difficulty": 3}]
/// }
/// ```
///
/// # Errors
///
/// Returns 404 if the page is empty.
pub async fn list_questions_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<QuestionPageResponse>, AppError> {
    let page = state.question_service.list_page(params.page()).await?;

    Ok(Json(QuestionPageResponse {
        success: true,
        total_questions: page.total_questions,
        categories: category_map(page.categories),
        questions: question_views(page.questions),
    }))
}

/// Creates a question.
///
/// # Endpoint
///
/// `POST /questions`
///
/// # Request Body
///
/// ```json
/// { "question": "...", "answer": "...", "category": 1, "difficulty": 2 }
/// ```
///
/// # Errors
///
/// Returns 400 if any field is missing, null or empty.
pub async fn create_question_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateQuestionRequest>,
) -> Result<Json<CreateQuestionResponse>, AppError> {
    let new_question = payload.into_new_question()?;
    let question = state.question_service.create_question(new_question).await?;

    Ok(Json(CreateQuestionResponse {
        question: QuestionView::from(question),
    }))
}

/// Deletes a question.
///
/// # Endpoint
///
/// `DELETE /questions/{q_id}`
///
/// # Errors
///
/// Returns 404 if no question has this id.
pub async fn delete_question_handler(
    ApiPath(q_id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<DeleteQuestionResponse>, AppError> {
    let deleted = state.question_service.delete_question(q_id).await?;

    Ok(Json(DeleteQuestionResponse { deleted }))
}
