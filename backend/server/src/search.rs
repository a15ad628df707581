//! # Search
//!
//! Name matching shared by every store backend.
//!
//! The query is matched literally as a case-insensitive substring. Nothing in
//! it is interpreted as a pattern, so `.*` only matches names containing `.*`.

/// An absent query becomes the empty query, which matches everything.
pub fn normalize_query(query: Option<&str>) -> String {
    query.unwrap_or_default().to_lowercase()
}

/// `query` must already be normalized.
pub fn name_matches(name: &str, query: &str) -> bool {
    query.is_empty() || name.to_lowercase().contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let query = normalize_query(Some("ph"));

        assert!(name_matches("Pho", &query));
        assert!(name_matches("PHO GA", &query));
        assert!(!name_matches("Bun Bo", &query));
    }

    #[test]
    fn test_empty_matches_all() {
        assert!(name_matches("Pho", &normalize_query(None)));
        assert!(name_matches("Pho", &normalize_query(Some(""))));
        assert!(!name_matches("Pho", &normalize_query(Some(" "))));
    }

    #[test]
    fn test_literal_query() {
        let query = normalize_query(Some(".*"));

        assert!(!name_matches("Pho", &query));
        assert!(name_matches("Regex .* soup", &query));
    }
}
