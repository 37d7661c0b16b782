//! Core domain entities.
//!
//! Entities are plain data structures. Creation inputs are separate structs
//! (`NewQuestion`, `NewCategory`) since ids are assigned by storage.

pub mod category;
pub mod question;

pub use category::{Category, NewCategory};
pub use question::{NewQuestion, Question, QuizFilter};
