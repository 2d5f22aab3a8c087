//! Monthly statistics page.

use std::fmt::Write;

use tally_core::budget::format_amount;
use tally_core::reports::{MonthlyReport, StatsView};
use tally_core::summary::title_case;

use super::{escape, page};

/// Renders the month picker and, when present, the report.
///
/// `token` is the sealed summary posted back by the save button.
pub fn render(view: &StatsView, token: Option<&str>) -> String {
    let selected = view.selected_month.as_deref().unwrap_or_default();

    let mut options = String::new();
    for month in &view.available_months {
        let marker = if month == selected { " selected" } else { "" };
        writeln!(
            options,
            r#"                <option value="{value}"{marker}>{value}</option>"#,
            value = escape(month),
        )
        .ok();
    }

    let report = match (&view.report, token) {
        (Some(report), Some(token)) => render_report(report, token),
        _ => String::new(),
    };

    page(
        "Expense Stats",
        &format!(
            r#"    <h2>Monthly Statistics</h2>
    <form method="POST" action="/stats">
        <div class="form-group">
            <label>Select Month:</label>
            <select name="month" required>
                <option value="">-- Select a month --</option>
{options}            </select>
        </div>
        <button type="submit">Get Stats</button>
    </form>
{report}"#
        ),
    )
}

fn render_report(report: &MonthlyReport, token: &str) -> String {
    let mut categories = String::new();
    for analysis in &report.category_analysis {
        let status = if analysis.has_budget() {
            format!("<br><small>{}</small>", escape(&analysis.status_message()))
        } else {
            String::new()
        };
        writeln!(
            categories,
            r#"        <div class="category-item">
            <strong>{}:</strong> ${}{status}
        </div>"#,
            escape(&title_case(&analysis.category)),
            analysis.spent_display(),
        )
        .ok();
    }

    let mut expenses = String::new();
    for expense in &report.expenses {
        writeln!(
            expenses,
            "            <tr><td>{}</td><td>{}</td><td>${}</td></tr>",
            escape(&expense.item),
            escape(&expense.category),
            format_amount(expense.price),
        )
        .ok();
    }

    format!(
        r#"    <div class="stats-box">
        <h3>Budget Analysis for {month}</h3>

        <h4>Spending by Category:</h4>
{categories}
        <div class="overall">
            <strong>Overall Total:</strong> ${total}<br>
            <small>{overall}</small>
        </div>

        <form method="POST" action="/save_summary" style="margin: 20px 0;">
            <input type="hidden" name="month" value="{month}">
            <input type="hidden" name="summary_data" value="{token}">
            <button type="submit" class="save">Save Summary to Google Sheet</button>
        </form>

        <h4>All Expenses:</h4>
        <table>
            <tr>
                <th>Item</th>
                <th>Category</th>
                <th>Price</th>
            </tr>
{expenses}        </table>
    </div>"#,
        month = escape(&report.month),
        total = format_amount(report.overall_total),
        overall = escape(&report.overall_message()),
        token = escape(token),
    )
}
