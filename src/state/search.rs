//! In-memory search for the list pages.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// Case-insensitive substring match of `query` against any of `fields`.
///
/// An empty (or whitespace-only) query matches everything, so the search box
/// starts out showing the full list.
pub fn matches(fields: &[&str], query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&query))
}
