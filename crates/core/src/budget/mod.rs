//! Budget table, category normalization, and status wording.

pub mod category;
pub mod status;
pub mod table;


pub use category::{DEFAULT_CATEGORY, normalize_category};
pub use status::{BudgetStatus, format_amount};
pub use table::BudgetTable;
