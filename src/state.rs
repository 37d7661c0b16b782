//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{CategoryService, QuestionService, QuizService};
use crate::domain::repositories::{CategoryRepository, QuestionRepository};
use crate::infrastructure::persistence::{PgCategoryRepository, PgQuestionRepository};

#[derive(Clone)]
pub struct AppState {
    pub category_service: Arc<CategoryService>,
    pub question_service: Arc<QuestionService>,
    pub quiz_service: Arc<QuizService>,
}

impl AppState {
    /// Wires services over the given storage handles.
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            category_service: Arc::new(CategoryService::new(categories.clone())),
            question_service: Arc::new(QuestionService::new(questions.clone(), categories)),
            quiz_service: Arc::new(QuizService::new(questions)),
        }
    }

    /// Wires services over PostgreSQL repositories sharing one pool.
    pub fn from_pool(pool: Arc<PgPool>) -> Self {
        Self::new(
            Arc::new(PgQuestionRepository::new(pool.clone())),
            Arc::new(PgCategoryRepository::new(pool)),
        )
    }
}
