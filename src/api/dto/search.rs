//! DTOs for question search.

use serde::{Deserialize, Serialize};

use crate::api::dto::question::QuestionView;

/// Request body for `POST /search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

impl SearchRequest {
    /// The term to match; absent or null means the empty term.
    pub fn term(&self) -> &str {
        self.search_term.as_deref().unwrap_or("")
    }
}

/// Response for `POST /search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub questions: Vec<QuestionView>,
    pub total_questions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_term_is_empty() {
        let req: SearchRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.term(), "");

        let req: SearchRequest = serde_json::from_str(r#"{"searchTerm": null}"#).unwrap();
        assert_eq!(req.term(), "");
    }

    #[test]
    fn test_camel_case_field() {
        let req: SearchRequest = serde_json::from_str(r#"{"searchTerm": "title"}"#).unwrap();
        assert_eq!(req.term(), "title");
    }
}
