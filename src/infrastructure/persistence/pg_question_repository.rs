//! PostgreSQL implementation of question repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewQuestion, Question, QuizFilter};
use crate::domain::repositories::QuestionRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct QuestionRow {
    id: i64,
    question: String,
    answer: String,
    category: i64,
    difficulty: i32,
}

impl From<QuestionRow> for Question {
    fn from(r: QuestionRow) -> Self {
        Question::new(r.id, r.question, r.answer, r.category, r.difficulty)
    }
}

/// PostgreSQL repository for trivia questions.
///
/// Writes run in their own transaction, committed before the call returns.
pub struct PgQuestionRepository {
    pool: Arc<PgPool>,
}

impl PgQuestionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionRepository for PgQuestionRepository {
    async fn list(&self) -> Result<Vec<Question>, AppError> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, AppError> {
        let row = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Question::from))
    }

    async fn find_by_category(&self, category: i64) -> Result<Vec<Question>, AppError> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn find_quiz_candidates(&self, filter: QuizFilter) -> Result<Vec<Question>, AppError> {
        let rows = sqlx::query_as::<_, QuestionRow>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE ($1::BIGINT IS NULL OR category = $1)
              AND NOT (id = ANY($2::BIGINT[]))
            ORDER BY id
            "#,
        )
        .bind(filter.category)
        .bind(&filter.exclude)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Question::from).collect())
    }

    async fn create(&self, new_question: NewQuestion) -> Result<Question, AppError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&new_question.question)
        .bind(&new_question.answer)
        .bind(new_question.category)
        .bind(new_question.difficulty)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(new_question.into_question(id))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}
