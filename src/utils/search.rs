//! Case-insensitive question text matching.

use regex::{Regex, RegexBuilder};

use crate::error::AppError;

/// Builds a case-insensitive matcher for a search term.
///
/// The term is matched as literal text: regex metacharacters are escaped, so
/// `"what?"` only matches a literal question mark. An empty term matches
/// everything.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the escaped pattern exceeds the regex
/// size limit.
pub fn term_matcher(term: &str) -> Result<Regex, AppError> {
    RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
        .map_err(|e| AppError::bad_request(format!("Invalid search term: {e}")))
}
