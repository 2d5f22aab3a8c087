//! Expense records and month labels.

pub mod month;
pub mod types;

pub use month::{month_label, parse_month_label};
pub use types::{Expense, ExpenseRecord, ExpenseRow, NewExpense};
