//! DTOs for question endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnError, DisplayFromStr, PickFirst, serde_as};
use validator::Validate;

use crate::domain::entities::{Category, NewQuestion, Question};
use crate::error::AppError;

/// Rejection message for an incomplete create request.
pub const MISSING_KEYS_MESSAGE: &str = "Request is missing one or more required keys.";

/// Wire shape of a question.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl From<Question> for QuestionView {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            category: q.category,
            difficulty: q.difficulty,
        }
    }
}

/// Formats a list of questions for the wire.
pub fn question_views(questions: Vec<Question>) -> Vec<QuestionView> {
    questions.into_iter().map(QuestionView::from).collect()
}

/// Response for `GET /questions`.
///
/// `categories` serializes as `{"1": "Science", ...}`.
#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub total_questions: usize,
    pub categories: BTreeMap<i64, String>,
    pub questions: Vec<QuestionView>,
}

/// Builds the `{id: type}` map sent alongside a page of questions.
pub fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// Request body for `POST /questions`.
///
/// Every field must be present and non-null; text fields must be non-empty.
/// Zero is a valid `category` or `difficulty`. A value of the wrong JSON type
/// (e.g. `"category": ""`) counts as missing.
///
/// `PickFirst` buffers each value, so a rejected one is fully consumed before
/// `DefaultOnError` replaces it with `None`.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub question: Option<String>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub answer: Option<String>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    #[validate(required)]
    pub category: Option<i64>,

    #[serde_as(as = "DefaultOnError<Option<PickFirst<(_, DisplayFromStr)>>>")]
    #[serde(default)]
    #[validate(required)]
    pub difficulty: Option<i32>,
}

impl CreateQuestionRequest {
    /// Validates presence of every field and converts to a domain input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with [`MISSING_KEYS_MESSAGE`] if any
    /// field is absent, null, of the wrong type, or an empty string.
    pub fn into_new_question(self) -> Result<NewQuestion, AppError> {
        let missing = || AppError::bad_request(MISSING_KEYS_MESSAGE);

        self.validate().map_err(|e| {
            tracing::debug!(errors = %e, "Create question request rejected");
            missing()
        })?;

        match (self.question, self.answer, self.category, self.difficulty) {
            (Some(question), Some(answer), Some(category), Some(difficulty)) => Ok(NewQuestion {
                question,
                answer,
                category,
                difficulty,
            }),
            _ => Err(missing()),
        }
    }
}

/// Response for `POST /questions`.
#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub question: QuestionView,
}

/// Response for `DELETE /questions/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteQuestionResponse {
    pub deleted: i64,
}
