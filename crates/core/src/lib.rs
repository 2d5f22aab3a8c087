//! Core business logic for Tally.
//!
//! This crate contains pure logic with ZERO web or HTTP client dependencies.
//! Everything here is a function of its inputs; rows come in already fetched.
//!
//! # Modules
//!
//! - `expense` - Expense records, store rows, and month labels
//! - `budget` - Budget table, category normalization, and status wording
//! - `reports` - Month discovery and monthly budget-vs-actual reports
//! - `summary` - Rows written when a report summary is saved

pub mod budget;
pub mod expense;
pub mod reports;
pub mod summary;
