//! Category listing service.

use std::sync::Arc;

use crate::domain::entities::{Category, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;

/// Service for reading (and, from the admin CLI, adding) categories.
pub struct CategoryService {
    repository: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    /// Creates a new category service.
    pub fn new(repository: Arc<dyn CategoryRepository>) -> Self {
        Self { repository }
    }

    /// Lists all categories ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        self.repository.list().await
    }

    /// Adds a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the label is blank.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_category(&self, kind: String) -> Result<Category, AppError> {
        let kind = kind.trim().to_string();
        if kind.is_empty() {
            return Err(AppError::bad_request("Category type must not be empty"));
        }

        let category = self.repository.create(NewCategory { kind }).await?;
        tracing::info!(id = category.id, kind = %category.kind, "Category created");
        Ok(category)
    }
}
