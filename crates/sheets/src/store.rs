//! Row store abstraction.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::SheetError;

/// One tab of the spreadsheet.
///
/// Listings wrap rows in `{ <collection_key>: [...] }`; appends wrap the
/// row in `{ <record_key>: {...} }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTable {
    /// Tab name used in the URL path.
    pub tab: String,
    /// Key holding the row list in listings.
    pub collection_key: String,
    /// Key wrapping a single row on append.
    pub record_key: String,
}

impl SheetTable {
    /// Creates a table description.
    #[must_use]
    pub fn new(
        tab: impl Into<String>,
        collection_key: impl Into<String>,
        record_key: impl Into<String>,
    ) -> Self {
        Self {
            tab: tab.into(),
            collection_key: collection_key.into(),
            record_key: record_key.into(),
        }
    }

    /// The expenses table living in `tab`.
    #[must_use]
    pub fn expenses(tab: impl Into<String>) -> Self {
        Self::new(tab, "expenses", "expense")
    }

    /// The summaries table living in `tab`.
    #[must_use]
    pub fn summaries(tab: impl Into<String>) -> Self {
        Self::new(tab, "summaries", "summary")
    }
}

/// List/append access to spreadsheet tabs.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Fetches every row of the table, in store order.
    async fn list_rows(&self, table: &SheetTable) -> Result<Vec<Value>, SheetError>;

    /// Appends one row to the table.
    async fn append_row(&self, table: &SheetTable, row: Value) -> Result<(), SheetError>;
}
