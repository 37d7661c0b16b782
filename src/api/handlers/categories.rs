//! Handlers for category endpoints.

use axum::{Json, extract::State};

use crate::api::dto::category::{CategoryListResponse, CategoryQuestionsResponse, CategoryView};
use crate::api::dto::question::question_views;
use crate::api::extract::ApiPath;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all categories.
///
/// # Endpoint
///
/// `GET /categories`
///
/// # Errors
///
/// Returns 500 if storage fails.
pub async fn list_categories_handler(
    State(state): State<AppState>,
) -> Result<Json<CategoryListResponse>, AppError> {
    let categories = state.category_service.list_categories().await?;

    Ok(Json(CategoryListResponse {
        success: true,
        categories: categories.into_iter().map(CategoryView::from).collect(),
    }))
}

/// Lists the questions of one category.
///
/// # Endpoint
///
/// `GET /categories/{cat_id}/questions`
///
/// No existence check is made: an unknown category yields an empty list.
///
/// # Errors
///
/// Returns 400 if `cat_id` is 0.
pub async fn category_questions_handler(
    ApiPath(cat_id): ApiPath<i64>,
    State(state): State<AppState>,
) -> Result<Json<CategoryQuestionsResponse>, AppError> {
    let questions = state.question_service.questions_by_category(cat_id).await?;

    Ok(Json(CategoryQuestionsResponse {
        total_questions: questions.len(),
        questions: question_views(questions),
        current_category: cat_id,
    }))
}
