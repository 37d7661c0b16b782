//! Fixed-size page slicing over an ordered list.

/// Number of questions on one page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Returns the items of the 1-indexed `page`, i.e. `[(page-1)*per_page, page*per_page)`.
///
/// Pages below 1 and pages past the end yield an empty vector.
///
/// # Examples
///
/// ```
/// use trivia_api::utils::pagination::paginate;
///
/// let items: Vec<u32> = (1..=25).collect();
/// assert_eq!(paginate(items.clone(), 3, 10), vec![21, 22, 23, 24, 25]);
/// assert!(paginate(items, 4, 10).is_empty());
/// ```
pub fn paginate<T>(items: Vec<T>, page: i64, per_page: usize) -> Vec<T> {
    if page < 1 || per_page == 0 {
        return Vec::new();
    }

    let Some(start) = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(per_page))
    else {
        return Vec::new();
    };

    items.into_iter().skip(start).take(per_page).collect()
}
