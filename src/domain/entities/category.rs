//! Category entity.

/// A question category. Categories are read-only over HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub kind: String,
}

impl Category {
    pub fn new(id: i64, kind: String) -> Self {
        Self { id, kind }
    }
}

/// Input data for creating a category (admin CLI only).
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub kind: String,
}
