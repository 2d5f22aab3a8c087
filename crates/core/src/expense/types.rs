//! Expense data types.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::month::month_label;

/// An expense as submitted from the form.
///
/// The price is forwarded verbatim; the remote store decides what it accepts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewExpense {
    /// Item description.
    pub item: String,
    /// Free-text category.
    pub category: String,
    /// Price as typed.
    pub price: String,
}

impl NewExpense {
    /// Stamps the expense with the month containing `today`.
    #[must_use]
    pub fn stamp(self, today: NaiveDate) -> ExpenseRecord {
        ExpenseRecord {
            month: month_label(today),
            item: self.item,
            category: self.category,
            price: self.price,
        }
    }
}

/// The record appended to the expenses table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseRecord {
    /// Month label, e.g. "March 2024".
    pub month: String,
    /// Item description.
    pub item: String,
    /// Free-text category.
    pub category: String,
    /// Price as typed.
    pub price: String,
}

/// Reads a text cell. The store sends numeric-looking cells as JSON
/// numbers, so numbers and booleans are kept in their JSON spelling.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// A row as returned by the remote store. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ExpenseRow {
    /// Month label.
    #[serde(default, deserialize_with = "lenient_text")]
    pub month: Option<String>,
    /// Item description.
    #[serde(default, deserialize_with = "lenient_text")]
    pub item: Option<String>,
    /// Free-text category.
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: Option<String>,
    /// Price, either a JSON number or a string.
    #[serde(default)]
    pub price: Option<Value>,
}

impl ExpenseRow {
    /// Returns the month label if present and non-empty.
    #[must_use]
    pub fn month_label(&self) -> Option<&str> {
        self.month.as_deref().filter(|m| !m.is_empty())
    }

    /// Parses the price. Missing or unparseable prices count as zero.
    #[must_use]
    pub fn price_decimal(&self) -> Decimal {
        match &self.price {
            Some(Value::Number(n)) => parse_decimal(&n.to_string()),
            Some(Value::String(s)) => parse_decimal(s),
            _ => None,
        }
        .unwrap_or(Decimal::ZERO)
    }

    /// Converts the row into an expense for display.
    #[must_use]
    pub fn to_expense(&self) -> Expense {
        Expense {
            month: self.month.clone().unwrap_or_default(),
            item: self.item.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
            price: self.price_decimal(),
        }
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// A stored expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Month label, e.g. "March 2024".
    pub month: String,
    /// Item description.
    pub item: String,
    /// Category exactly as entered.
    pub category: String,
    /// Parsed price.
    pub price: Decimal,
}
