//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access so services receive a storage handle
//! instead of reaching for ambient state. Implementations live in
//! `crate::infrastructure::persistence`; mock implementations are generated
//! via `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`QuestionRepository`] - Question scans, lookups, inserts and deletes
//! - [`CategoryRepository`] - Category listing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod category_repository;
pub mod question_repository;

pub use category_repository::CategoryRepository;
pub use question_repository::QuestionRepository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
