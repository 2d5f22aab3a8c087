//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::{BudgetStatus, format_amount};
use crate::expense::Expense;

/// Spending for one normalized category compared to its ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAnalysis {
    /// Normalized category key.
    pub category: String,
    /// Amount spent, rounded to 2 decimals.
    pub spent: Decimal,
    /// Ceiling, or zero when none is configured.
    pub budget: Decimal,
    /// Comparison outcome.
    pub status: BudgetStatus,
}

impl CategoryAnalysis {
    /// Returns true if the category has a configured ceiling.
    #[must_use]
    pub fn has_budget(&self) -> bool {
        !matches!(self.status, BudgetStatus::NoBudgetSet)
    }

    /// Status wording for this category.
    #[must_use]
    pub fn status_message(&self) -> String {
        self.status.category_message()
    }

    /// Spent amount as displayed.
    #[must_use]
    pub fn spent_display(&self) -> String {
        format_amount(self.spent)
    }
}

/// Budget report for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyReport {
    /// Month label the report covers.
    pub month: String,
    /// Per-category analysis in first-seen order.
    pub category_analysis: Vec<CategoryAnalysis>,
    /// Sum of category totals, rounded to 2 decimals.
    pub overall_total: Decimal,
    /// Overall comparison outcome.
    pub overall_status: BudgetStatus,
    /// Expenses of the month in store order.
    pub expenses: Vec<Expense>,
}

impl MonthlyReport {
    /// The subset replayed when the summary is saved.
    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            category_analysis: self.category_analysis.clone(),
            overall_total: self.overall_total,
            overall_status: self.overall_status,
        }
    }

    /// Overall status wording.
    #[must_use]
    pub fn overall_message(&self) -> String {
        self.overall_status.overall_message()
    }
}

/// Replayable part of a report: category analysis plus overall total and status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Per-category analysis in report order.
    pub category_analysis: Vec<CategoryAnalysis>,
    /// Overall total, rounded to 2 decimals.
    pub overall_total: Decimal,
    /// Overall comparison outcome.
    pub overall_status: BudgetStatus,
}

impl ReportSummary {
    /// Overall status wording.
    #[must_use]
    pub fn overall_message(&self) -> String {
        self.overall_status.overall_message()
    }
}

/// Everything the stats page needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsView {
    /// Distinct month labels, latest first.
    pub available_months: Vec<String>,
    /// Month chosen by the user, if any.
    pub selected_month: Option<String>,
    /// Report for the selected month, if it has expenses.
    pub report: Option<MonthlyReport>,
}
