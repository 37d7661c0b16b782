//! Handler for quiz play.

use axum::{Json, extract::State};

use crate::api::dto::question::QuestionView;
use crate::api::dto::quiz::{QuizRequest, QuizResponse};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Returns a random question not yet asked in this quiz.
///
/// # Endpoint
///
/// `POST /quizzes`
///
/// # Request Body
///
/// ```json
/// { "previous_questions": [3, 9], "quiz_category": { "type": "Science", "id": 1 } }
/// ```
///
/// A category id of 0 draws from every category. When no question is left,
/// the response body is `{}`.
///
/// # Errors
///
/// Returns 400 if `quiz_category` is missing, falsy, or has no `id`.
pub async fn quiz_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<QuizRequest>,
) -> Result<Json<QuizResponse>, AppError> {
    let filter = payload.into_filter()?;
    let question = state.quiz_service.next_question(filter).await?;

    Ok(Json(QuizResponse {
        question: question.map(QuestionView::from),
    }))
}
