//! Quiz question selection.

use std::sync::Arc;

use rand::seq::IndexedRandom;

use crate::domain::entities::{Question, QuizFilter};
use crate::domain::repositories::QuestionRepository;
use crate::error::AppError;

/// Picks the next question of a running quiz.
pub struct QuizService {
    questions: Arc<dyn QuestionRepository>,
}

impl QuizService {
    /// Creates a new quiz service.
    pub fn new(questions: Arc<dyn QuestionRepository>) -> Self {
        Self { questions }
    }

    /// Chooses one question uniformly at random among those matching `filter`.
    ///
    /// Returns `None` once every matching question has been asked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn next_question(&self, filter: QuizFilter) -> Result<Option<Question>, AppError> {
        let candidates = self.questions.find_quiz_candidates(filter.clone()).await?;

        let picked = candidates
            .into_iter()
            .filter(|q| filter.matches(q))
            .collect::<Vec<_>>()
            .choose(&mut rand::rng())
            .cloned();

        tracing::debug!(
            category = ?filter.category,
            asked = filter.exclude.len(),
            picked = ?picked.as_ref().map(|q| q.id),
            "Quiz question selected"
        );

        Ok(picked)
    }
}
