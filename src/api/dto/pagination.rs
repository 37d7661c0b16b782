//! Pagination query parameters.

use std::num::IntErrorKind;

use serde::Deserialize;

/// `?page=N` query parameter.
///
/// A value that is not an integer is treated as absent, so the first page is
/// served. An integer too large for `i64` saturates, so it names a page past
/// the end.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: Option<String>,
}

impl PaginationParams {
    /// Requested page, defaulting to 1.
    pub fn page(&self) -> i64 {
        let Some(raw) = self.page.as_deref() else {
            return 1;
        };

        match raw.trim().parse::<i64>() {
            Ok(page) => page,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn parse(uri: &'static str) -> PaginationParams {
        let Query(params) = Query::try_from_uri(&Uri::from_static(uri)).unwrap();
        params
    }

    #[test]
    fn test_default_page() {
        assert_eq!(parse("/questions").page(), 1);
    }

    #[test]
    fn test_explicit_page() {
        assert_eq!(parse("/questions?page=3").page(), 3);
    }

    #[test]
    fn test_unparsable_page_falls_back_to_first() {
        assert_eq!(parse("/questions?page=abc").page(), 1);
        assert_eq!(parse("/questions?page=").page(), 1);
        assert_eq!(parse("/questions?page=1.5").page(), 1);
    }

    #[test]
    fn test_negative_page_kept() {
        assert_eq!(parse("/questions?page=-2").page(), -2);
    }

    #[test]
    fn test_out_of_range_page_saturates() {
        assert_eq!(parse("/questions?page=99999999999999999999").page(), i64::MAX);
        assert_eq!(parse("/questions?page=-99999999999999999999").page(), i64::MIN);
    }
}
