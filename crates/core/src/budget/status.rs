//! Budget comparison and status wording.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of comparing spending against a budget ceiling.
///
/// Amounts are the absolute difference rounded to 2 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Spent more than the ceiling.
    OverBudget(Decimal),
    /// Spent less than the ceiling.
    UnderBudget(Decimal),
    /// Spent exactly the ceiling.
    ExactlyAtBudget,
    /// No ceiling configured.
    NoBudgetSet,
}

impl BudgetStatus {
    /// Compares `spent` against `budget`.
    #[must_use]
    pub fn compare(spent: Decimal, budget: Decimal) -> Self {
        let difference = spent - budget;
        match difference.cmp(&Decimal::ZERO) {
            Ordering::Greater => Self::OverBudget(difference.round_dp(2)),
            Ordering::Less => Self::UnderBudget(difference.abs().round_dp(2)),
            Ordering::Equal => Self::ExactlyAtBudget,
        }
    }

    /// Compares against an optional ceiling.
    #[must_use]
    pub fn against(spent: Decimal, budget: Option<Decimal>) -> Self {
        budget.map_or(Self::NoBudgetSet, |budget| Self::compare(spent, budget))
    }

    /// Wording shown for a single category.
    #[must_use]
    pub fn category_message(&self) -> String {
        match self {
            Self::OverBudget(amount) => {
                format!("You were ${} over budget.", format_amount(*amount))
            }
            Self::UnderBudget(amount) => {
                format!("Congrats! You were ${} under budget.", format_amount(*amount))
            }
            Self::ExactlyAtBudget => "Congrats! You were exactly at budget.".to_string(),
            Self::NoBudgetSet => "No budget set for this category.".to_string(),
        }
    }

    /// Wording shown for the overall total.
    #[must_use]
    pub fn overall_message(&self) -> String {
        match self {
            Self::OverBudget(amount) => format!(
                "Uh oh, you were ${} over your overall total budget",
                format_amount(*amount)
            ),
            Self::UnderBudget(amount) => format!(
                "Nice! You were ${} under your overall total budget!",
                format_amount(*amount)
            ),
            Self::ExactlyAtBudget => "Whoa! You were exactly at budget!".to_string(),
            Self::NoBudgetSet => "No overall budget set.".to_string(),
        }
    }
}

/// Formats an amount rounded to 2 decimals, without trailing zeros but with
/// at least one fractional digit: `445.50` -> "445.5", `10` -> "10.0".
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2).normalize();
    if rounded.scale() == 0 {
        format!("{rounded}.0")
    } else {
        rounded.to_string()
    }
}
