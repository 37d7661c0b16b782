//! DTOs for quiz play.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DefaultOnError, DisplayFromStr, PickFirst, serde_as};

use crate::api::dto::question::QuestionView;
use crate::domain::entities::QuizFilter;
use crate::error::AppError;

/// Rejection message when the quiz category is missing.
pub const MISSING_QUIZ_KEYS_MESSAGE: &str = "Required keys missing from request body";

/// Category selected for a quiz. An `id` of 0 means any category.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub id: Option<i64>,

    #[serde_as(as = "DefaultOnError")]
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Request body for `POST /quizzes`.
///
/// `quiz_category` is kept as raw JSON so that falsy or malformed values
/// (`false`, `0`, `""`, `{}`) reject with the missing-keys message rather
/// than a deserialization error.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Option<Vec<i64>>,

    #[serde(default)]
    pub quiz_category: Option<Value>,
}

impl QuizRequest {
    /// Converts the request into a candidate filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `quiz_category` is absent or
    /// falsy, is not a category object, or has no usable `id`.
    pub fn into_filter(self) -> Result<QuizFilter, AppError> {
        let category_id = self
            .quiz_category
            .filter(is_truthy)
            .and_then(|value| serde_json::from_value::<QuizCategory>(value).ok())
            .and_then(|c| c.id)
            .ok_or_else(|| AppError::bad_request(MISSING_QUIZ_KEYS_MESSAGE))?;

        Ok(QuizFilter::new(
            category_id,
            self.previous_questions.unwrap_or_default(),
        ))
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Response for `POST /quizzes`; serializes as `{}` when the quiz is exhausted.
#[derive(Debug, Serialize)]
pub struct QuizResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionView>,
}
