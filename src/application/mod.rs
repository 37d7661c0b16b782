//! Application layer services implementing business logic.
//!
//! Services receive repository handles at construction and expose the
//! operations HTTP handlers call.
//!
//! # Available Services
//!
//! - [`services::category_service::CategoryService`] - Category listing
//! - [`services::question_service::QuestionService`] - Paging, search, filtering, create and delete
//! - [`services::quiz_service::QuizService`] - Next quiz question selection

pub mod services;
