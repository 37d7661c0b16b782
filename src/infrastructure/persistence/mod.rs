//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`PgQuestionRepository`] - Question storage and retrieval
//! - [`PgCategoryRepository`] - Category listing

pub mod pg_category_repository;
pub mod pg_question_repository;

pub use pg_category_repository::PgCategoryRepository;
pub use pg_question_repository::PgQuestionRepository;
