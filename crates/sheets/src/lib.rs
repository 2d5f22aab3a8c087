//! Remote spreadsheet row store for Tally.
//!
//! The spreadsheet API exposes each tab as a table with two operations:
//! list every row, and append one row. This crate provides:
//! - The [`RowStore`] trait and its HTTP implementation [`SheetyClient`]
//! - An [`InMemoryRowStore`] for tests and local runs
//! - Repositories converting between JSON rows and core types

pub mod client;
pub mod error;
pub mod memory;
pub mod repositories;
pub mod store;

pub use client::SheetyClient;
pub use error::SheetError;
pub use memory::InMemoryRowStore;
pub use repositories::{ExpenseRepository, PublishError, SummaryPublisher};
pub use store::{RowStore, SheetTable};
