//! Category keys.

/// Key used when an expense has no category.
pub const DEFAULT_CATEGORY: &str = "other";

/// Normalizes a category into its aggregation and budget-lookup key.
///
/// Lowercases and removes spaces. Punctuation is kept, so "Home + Health"
/// becomes "home+health".
///
/// Missing categories fall back to [`DEFAULT_CATEGORY`]. Blank ones do too,
/// instead of forming an empty key, so a cleared cell is budgeted as "other".
#[must_use]
pub fn normalize_category(category: Option<&str>) -> String {
    match category {
        Some(raw) if !raw.trim().is_empty() => raw.to_lowercase().replace(' ', ""),
        _ => DEFAULT_CATEGORY.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Food", "food")]
    #[case("Home + Health", "home+health")]
    #[case("home+health", "home+health")]
    #[case("Beauty + Clothes", "beauty+clothes")]
    #[case("  Transport ", "transport")]
    #[case("SPLIT WISE", "splitwise")]
    #[case("home-health", "home-health")]
    fn test_normalize_category(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_category(Some(raw)), expected);
    }

    #[test]
    fn test_missing_category_is_other() {
        assert_eq!(normalize_category(None), "other");
        assert_eq!(normalize_category(Some("")), "other");
        assert_eq!(normalize_category(Some("   ")), "other");
    }
}
