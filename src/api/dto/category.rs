//! DTOs for category endpoints.

use serde::Serialize;

use crate::api::dto::question::QuestionView;
use crate::domain::entities::Category;

/// Wire shape of a category.
#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<Category> for CategoryView {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            kind: c.kind,
        }
    }
}

/// Response for `GET /categories`.
#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: Vec<CategoryView>,
}

/// Response for `GET /categories/{id}/questions`.
#[derive(Debug, Serialize)]
pub struct CategoryQuestionsResponse {
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
    pub current_category: i64,
}
