//! Rows written when a report summary is saved.

use serde::Serialize;

use crate::budget::format_amount;
use crate::reports::ReportSummary;

/// Category written on every summary row.
pub const SUMMARY_CATEGORY: &str = "Summary";

/// A human-readable row appended to the summaries table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// Month label the summary covers.
    pub month: String,
    /// Formatted label.
    pub item: String,
    /// Always [`SUMMARY_CATEGORY`].
    pub category: String,
    /// Amount as a decimal string.
    pub price: String,
}

impl SummaryRow {
    fn new(month: &str, item: String, price: String) -> Self {
        Self {
            month: month.to_string(),
            item,
            category: SUMMARY_CATEGORY.to_string(),
            price,
        }
    }
}

/// Serializes a summary into rows: one separator, one per category in
/// report order, one overall total.
#[must_use]
pub fn summary_rows(month: &str, summary: &ReportSummary) -> Vec<SummaryRow> {
    let mut rows = Vec::with_capacity(summary.category_analysis.len() + 2);

    rows.push(SummaryRow::new(
        month,
        format!("=== SUMMARY FOR {} ===", month.to_uppercase()),
        "0".to_string(),
    ));

    for analysis in &summary.category_analysis {
        let spent = format_amount(analysis.spent);
        rows.push(SummaryRow::new(
            month,
            format!(
                "{}: ${} ({})",
                title_case(&analysis.category),
                spent,
                analysis.status_message()
            ),
            spent,
        ));
    }

    let total = format_amount(summary.overall_total);
    rows.push(SummaryRow::new(
        month,
        format!("OVERALL TOTAL: ${} ({})", total, summary.overall_message()),
        total,
    ));

    rows
}

/// Uppercases the first letter of every run of letters and lowercases the
/// rest, so "home+health" becomes "Home+Health".
#[must_use]
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;

    for ch in value.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }

    out
}
