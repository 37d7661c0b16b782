#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::{Arc, Mutex};
use trivia_api::AppError;
use trivia_api::domain::entities::{Category, NewCategory, NewQuestion, Question, QuizFilter};
use trivia_api::domain::repositories::{CategoryRepository, QuestionRepository};
use trivia_api::routes::api_router;
use trivia_api::state::AppState;

/// In-memory storage standing in for PostgreSQL in handler tests.
#[derive(Default)]
pub struct MemoryStore {
    questions: Mutex<Vec<Question>>,
    categories: Mutex<Vec<Category>>,
    next_id: Mutex<i64>,
    /// When set, every call fails with this detail.
    failure: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            next_id: Mutex::new(1),
            ..Default::default()
        })
    }

    pub fn add_category(&self, id: i64, kind: &str) {
        self.categories
            .lock()
            .unwrap()
            .push(Category::new(id, kind.to_string()));
    }

    pub fn add_question(&self, question: &str, answer: &str, category: i64, difficulty: i32) -> i64 {
        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;

        self.questions.lock().unwrap().push(Question::new(
            id,
            question.to_string(),
            answer.to_string(),
            category,
            difficulty,
        ));
        id
    }

    pub fn question_ids(&self) -> Vec<i64> {
        self.questions.lock().unwrap().iter().map(|q| q.id).collect()
    }

    pub fn fail_with(&self, detail: &str) {
        *self.failure.lock().unwrap() = Some(detail.to_string());
    }

    fn check(&self) -> Result<(), AppError> {
        match self.failure.lock().unwrap().as_ref() {
            Some(detail) => Err(AppError::internal(detail.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl QuestionRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Question>, AppError> {
        self.check()?;
        let mut all = self.questions.lock().unwrap().clone();
        all.sort_by_key(|q| q.id);
        Ok(all)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Question>, AppError> {
        self.check()?;
        Ok(self
            .questions
            .lock()
            .unwrap()
            .iter()
            .find(|q| q.id == id)
            .cloned())
    }

    async fn find_by_category(&self, category: i64) -> Result<Vec<Question>, AppError> {
        Ok(QuestionRepository::list(self)
            .await?
            .into_iter()
            .filter(|q| q.category == category)
            .collect())
    }

    async fn find_quiz_candidates(&self, filter: QuizFilter) -> Result<Vec<Question>, AppError> {
        Ok(QuestionRepository::list(self)
            .await?
            .into_iter()
            .filter(|q| filter.matches(q))
            .collect())
    }

    async fn create(&self, new_question: NewQuestion) -> Result<Question, AppError> {
        self.check()?;
        let id = self.add_question(
            &new_question.question,
            &new_question.answer,
            new_question.category,
            new_question.difficulty,
        );
        Ok(new_question.into_question(id))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.check()?;
        let mut questions = self.questions.lock().unwrap();
        let before = questions.len();
        questions.retain(|q| q.id != id);
        Ok(questions.len() != before)
    }
}

#[async_trait]
impl CategoryRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<Category>, AppError> {
        self.check()?;
        let mut all = self.categories.lock().unwrap().clone();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }

    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError> {
        self.check()?;
        let mut categories = self.categories.lock().unwrap();
        let id = categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let category = Category::new(id, new_category.kind);
        categories.push(category.clone());
        Ok(category)
    }
}

/// Store seeded with the Science/Art categories and no questions.
pub fn seeded_store() -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    store.add_category(1, "Science");
    store.add_category(2, "Art");
    store
}

pub fn create_test_state(store: Arc<MemoryStore>) -> AppState {
    AppState::new(store.clone(), store)
}

pub fn make_server(store: Arc<MemoryStore>) -> TestServer {
    TestServer::new(api_router(create_test_state(store))).unwrap()
}

pub async fn create_test_question(
    pool: &PgPool,
    question: &str,
    answer: &str,
    category: i64,
    difficulty: i32,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO questions (question, answer, category, difficulty) VALUES ($1, $2, $3, $4) RETURNING id",
    )
    .bind(question)
    .bind(answer)
    .bind(category)
    .bind(difficulty)
    .fetch_one(pool)
    .await
    .unwrap()
}
