//! Month discovery and monthly budget-vs-actual reports.

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::{CategoryAnalysis, MonthlyReport, ReportSummary, StatsView};
