//! Question browsing and management service.

use std::sync::Arc;

use crate::domain::entities::{Category, NewQuestion, Question};
use crate::domain::repositories::{CategoryRepository, QuestionRepository};
use crate::error::AppError;
use crate::utils::pagination::{QUESTIONS_PER_PAGE, paginate};
use crate::utils::search::term_matcher;

/// One page of questions plus the data the client renders around it.
#[derive(Debug, Clone)]
pub struct QuestionPage {
    /// Count of all questions, before paging.
    pub total_questions: usize,
    pub categories: Vec<Category>,
    pub questions: Vec<Question>,
}

/// Service for listing, searching, creating and deleting questions.
pub struct QuestionService {
    questions: Arc<dyn QuestionRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl QuestionService {
    /// Creates a new question service.
    pub fn new(
        questions: Arc<dyn QuestionRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            questions,
            categories,
        }
    }

    /// Returns the 1-indexed `page` of questions ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the page is empty: past the last
    /// page, below 1, or no questions stored at all.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_page(&self, page: i64) -> Result<QuestionPage, AppError> {
        let all = self.questions.list().await?;
        let total_questions = all.len();
        let categories = self.categories.list().await?;

        let questions = paginate(all, page, QUESTIONS_PER_PAGE);
        if questions.is_empty() {
            tracing::debug!(page, total_questions, "Requested page is empty");
            return Err(AppError::route_not_found());
        }

        Ok(QuestionPage {
            total_questions,
            categories,
            questions,
        })
    }

    /// Deletes a question and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no question has this id.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_question(&self, id: i64) -> Result<i64, AppError> {
        let invalid = || AppError::not_found(format!("Question with ID: {id} is invalid."));

        if self.questions.find_by_id(id).await?.is_none() {
            return Err(invalid());
        }

        // Another request may have removed it between lookup and delete.
        if !self.questions.delete(id).await? {
            return Err(invalid());
        }

        tracing::info!(id, "Question deleted");
        Ok(id)
    }

    /// Stores a new question.
    ///
    /// The category reference is not checked against existing categories.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_question(&self, new_question: NewQuestion) -> Result<Question, AppError> {
        let question = self.questions.create(new_question).await?;
        tracing::info!(id = question.id, category = question.category, "Question created");
        Ok(question)
    }

    /// Returns every question whose text contains `term`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the term cannot be compiled.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, AppError> {
        let matcher = term_matcher(term)?;

        Ok(self
            .questions
            .list()
            .await?
            .into_iter()
            .filter(|q| matcher.is_match(&q.question))
            .collect())
    }

    /// Returns the questions of a category.
    ///
    /// A category id with no stored category yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `category_id` is 0.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn questions_by_category(&self, category_id: i64) -> Result<Vec<Question>, AppError> {
        if category_id == 0 {
            return Err(AppError::bad_request(format!(
                "Category with ID: {category_id} is invalid."
            )));
        }

        self.questions.find_by_category(category_id).await
    }
}
