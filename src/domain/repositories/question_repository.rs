//! Repository trait for question data access.

use crate::domain::entities::{NewQuestion, Question, QuizFilter};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for trivia questions.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgQuestionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_question.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Returns every question ordered by ascending id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self) -> Result<Vec<Question>, AppError>;

    /// Finds a question by its primary key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, AppError>;

    /// Returns the questions of one category ordered by ascending id.
    ///
    /// No existence check is made against the categories table.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_category(&self, category: i64) -> Result<Vec<Question>, AppError>;

    /// Returns every question matching a quiz filter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_quiz_candidates(&self, filter: QuizFilter) -> Result<Vec<Question>, AppError>;

    /// Inserts a question and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_question: NewQuestion) -> Result<Question, AppError>;

    /// Deletes a question by id.
    ///
    /// Returns `false` when no row had that id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
