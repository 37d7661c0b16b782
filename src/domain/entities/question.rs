//! Question entity: one trivia question and its answer.

/// A stored trivia question.
///
/// `category` references a [`super::Category`] id, but the reference is not
/// enforced on write. `difficulty` is 1–5 by convention only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl Question {
    pub fn new(id: i64, question: String, answer: String, category: i64, difficulty: i32) -> Self {
        Self {
            id,
            question,
            answer,
            category,
            difficulty,
        }
    }
}

/// Input data for creating a new question. The id is assigned by storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Attaches a storage-assigned id.
    pub fn into_question(self, id: i64) -> Question {
        Question::new(id, self.question, self.answer, self.category, self.difficulty)
    }
}

/// Candidate filter for picking the next quiz question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizFilter {
    /// Restrict to this category; `None` means any category.
    pub category: Option<i64>,
    /// Question ids already asked in this quiz.
    pub exclude: Vec<i64>,
}

impl QuizFilter {
    /// Builds a filter from the wire-level category id, where `0` means "any".
    pub fn new(category_id: i64, previous_questions: Vec<i64>) -> Self {
        Self {
            category: (category_id != 0).then_some(category_id),
            exclude: previous_questions,
        }
    }

    pub fn matches(&self, question: &Question) -> bool {
        self.category.is_none_or(|c| c == question.category) && !self.exclude.contains(&question.id)
    }
}
