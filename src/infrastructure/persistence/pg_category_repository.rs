//! PostgreSQL implementation of category repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Category, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;

#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    #[sqlx(rename = "type")]
    kind: String,
}

/// PostgreSQL repository for question categories.
pub struct PgCategoryRepository {
    pool: Arc<PgPool>,
}

impl PgCategoryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>, AppError> {
        let rows = sqlx::query_as::<_, CategoryRow>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| Category::new(r.id, r.kind))
            .collect())
    }

    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (type) VALUES ($1) RETURNING id, type",
        )
        .bind(&new_category.kind)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Category::new(row.id, row.kind))
    }
}
