//! Month labels such as "March 2024".

use chrono::NaiveDate;

const MONTH_LABEL_FORMAT: &str = "%B %Y";

/// Formats a date as "<FullMonthName> <FourDigitYear>".
#[must_use]
pub fn month_label(date: NaiveDate) -> String {
    date.format(MONTH_LABEL_FORMAT).to_string()
}

/// Parses a month label into the first day of that month.
///
/// Returns `None` for anything that is not "<MonthName> <Year>".
#[must_use]
pub fn parse_month_label(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("1 {label}"), "%d %B %Y").ok()
}
