//! Report generation service.

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;

use super::types::{CategoryAnalysis, MonthlyReport, StatsView};
use crate::budget::{BudgetStatus, BudgetTable, normalize_category};
use crate::expense::{ExpenseRow, parse_month_label};

/// Service for building monthly budget reports.
pub struct ReportService;

impl ReportService {
    /// Returns the distinct month labels present in `rows`, latest first.
    ///
    /// Empty and missing labels are skipped. Labels that do not parse as
    /// "<Month> <Year>" sort after every parsed one; ties keep the order in
    /// which labels were first seen.
    #[must_use]
    pub fn available_months(rows: &[ExpenseRow]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut months: Vec<String> = rows
            .iter()
            .filter_map(ExpenseRow::month_label)
            .filter(|month| seen.insert(*month))
            .map(str::to_string)
            .collect();

        // Stable sort: equal keys stay in encounter order.
        months.sort_by_key(|month| Reverse(parse_month_label(month)));
        months
    }

    /// Rows whose month equals `month` exactly, in store order.
    #[must_use]
    pub fn rows_for_month<'a>(rows: &'a [ExpenseRow], month: &str) -> Vec<&'a ExpenseRow> {
        rows.iter()
            .filter(|row| row.month.as_deref() == Some(month))
            .collect()
    }

    /// Sums prices per normalized category, in first-seen order.
    #[must_use]
    pub fn category_totals(rows: &[&ExpenseRow]) -> Vec<(String, Decimal)> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut totals: Vec<(String, Decimal)> = Vec::new();

        for row in rows {
            let category = normalize_category(row.category.as_deref());
            let price = row.price_decimal();
            match index.get(&category) {
                Some(&i) => totals[i].1 += price,
                None => {
                    index.insert(category.clone(), totals.len());
                    totals.push((category, price));
                }
            }
        }

        totals
    }

    /// Builds the report for `month`.
    ///
    /// Returns `None` if no row belongs to the month.
    #[must_use]
    pub fn build(month: &str, rows: &[ExpenseRow], table: &BudgetTable) -> Option<MonthlyReport> {
        let month_rows = Self::rows_for_month(rows, month);
        if month_rows.is_empty() {
            return None;
        }

        let totals = Self::category_totals(&month_rows);

        let category_analysis = totals
            .iter()
            .map(|(category, spent)| {
                let budget = table.budget_for(category);
                CategoryAnalysis {
                    category: category.clone(),
                    spent: spent.round_dp(2),
                    budget: budget.unwrap_or(Decimal::ZERO),
                    status: BudgetStatus::against(*spent, budget),
                }
            })
            .collect();

        let total_spent: Decimal = totals.iter().map(|(_, spent)| *spent).sum();

        Some(MonthlyReport {
            month: month.to_string(),
            category_analysis,
            overall_total: total_spent.round_dp(2),
            overall_status: BudgetStatus::compare(total_spent, table.overall()),
            expenses: month_rows.iter().map(|row| row.to_expense()).collect(),
        })
    }

    /// Prepares the stats page: available months plus, when a month is
    /// selected, its report.
    #[must_use]
    pub fn prepare(selection: Option<&str>, rows: &[ExpenseRow], table: &BudgetTable) -> StatsView {
        let available_months = Self::available_months(rows);
        let selected_month = selection.filter(|m| !m.is_empty()).map(str::to_string);
        let report = selected_month
            .as_deref()
            .and_then(|month| Self::build(month, rows, table));

        StatsView {
            available_months,
            selected_month,
            report,
        }
    }
}
