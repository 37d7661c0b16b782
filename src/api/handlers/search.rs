//! Handler for free-text question search.

use axum::{Json, extract::State};

use crate::api::dto::question::question_views;
use crate::api::dto::search::{SearchRequest, SearchResponse};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Searches question text, ignoring case. Results are not paginated.
///
/// # Endpoint
///
/// `POST /search`
///
/// # Request Body
///
/// ```json
/// { "searchTerm": "title" }
/// ```
///
/// An absent or empty term returns every question.
pub async fn search_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let questions = state.question_service.search(payload.term()).await?;

    Ok(Json(SearchResponse {
        total_questions: questions.len(),
        questions: question_views(questions),
    }))
}
