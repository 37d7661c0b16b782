//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod categories;
pub mod fallback;
pub mod health;
pub mod questions;
pub mod quizzes;
pub mod search;

pub use categories::{category_questions_handler, list_categories_handler};
pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use health::health_handler;
pub use questions::{create_question_handler, delete_question_handler, list_questions_handler};
pub use quizzes::quiz_handler;
pub use search::search_handler;
