//! Repositories converting between spreadsheet rows and core types.

pub mod expense;
pub mod summary;

pub use expense::ExpenseRepository;
pub use summary::{PublishError, SummaryPublisher};
