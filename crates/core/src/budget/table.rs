//! Fixed budget ceilings.

use std::collections::HashMap;
use std::sync::LazyLock;

use rust_decimal::Decimal;

/// Monthly ceiling per normalized category.
const CATEGORY_BUDGETS: [(&str, i64); 7] = [
    ("food", 450),
    ("home+health", 100),
    ("beauty+clothes", 100),
    ("other", 150),
    ("transport", 100),
    ("entertainment", 200),
    ("splitwise", 200),
];

/// Monthly ceiling across all categories.
const OVERALL_BUDGET: i64 = 1700;

static STANDARD: LazyLock<BudgetTable> = LazyLock::new(|| {
    BudgetTable::new(
        CATEGORY_BUDGETS
            .iter()
            .map(|(category, amount)| ((*category).to_string(), Decimal::from(*amount))),
        Decimal::from(OVERALL_BUDGET),
    )
});

/// Per-category budget ceilings plus an overall ceiling.
///
/// Keys are normalized category names; a category with no entry has no budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetTable {
    categories: HashMap<String, Decimal>,
    overall: Decimal,
}

impl BudgetTable {
    /// Creates a table from `(normalized category, ceiling)` pairs.
    #[must_use]
    pub fn new(categories: impl IntoIterator<Item = (String, Decimal)>, overall: Decimal) -> Self {
        Self {
            categories: categories.into_iter().collect(),
            overall,
        }
    }

    /// The process-wide table.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Ceiling for a normalized category, if one is configured.
    #[must_use]
    pub fn budget_for(&self, category: &str) -> Option<Decimal> {
        self.categories.get(category).copied()
    }

    /// Overall monthly ceiling.
    #[must_use]
    pub const fn overall(&self) -> Decimal {
        self.overall
    }

    /// Number of categories with a ceiling.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if no category has a ceiling.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_standard_table() {
        let table = BudgetTable::standard();
        assert_eq!(table.len(), 7);
        assert_eq!(table.overall(), dec!(1700));
        assert_eq!(table.budget_for("food"), Some(dec!(450)));
        assert_eq!(table.budget_for("home+health"), Some(dec!(100)));
        assert_eq!(table.budget_for("beauty+clothes"), Some(dec!(100)));
        assert_eq!(table.budget_for("other"), Some(dec!(150)));
        assert_eq!(table.budget_for("transport"), Some(dec!(100)));
        assert_eq!(table.budget_for("entertainment"), Some(dec!(200)));
        assert_eq!(table.budget_for("splitwise"), Some(dec!(200)));
    }

    #[test]
    fn test_lookup_is_exact() {
        let table = BudgetTable::standard();
        assert_eq!(table.budget_for("Food"), None);
        assert_eq!(table.budget_for("home + health"), None);
        assert_eq!(table.budget_for("gifts"), None);
    }
}
