//! Expense repository.

use std::sync::Arc;

use tally_core::expense::{ExpenseRecord, ExpenseRow};
use tracing::info;

use crate::error::SheetError;
use crate::store::{RowStore, SheetTable};

/// Reads and appends expense rows.
#[derive(Clone)]
pub struct ExpenseRepository {
    store: Arc<dyn RowStore>,
    table: SheetTable,
}

impl ExpenseRepository {
    /// Creates a new expense repository.
    #[must_use]
    pub fn new(store: Arc<dyn RowStore>, table: SheetTable) -> Self {
        Self { store, table }
    }

    /// Fetches every expense row in store order.
    ///
    /// # Errors
    ///
    /// Returns the store error, or `SheetError::Decode` if a row is not an
    /// object with the expected field types.
    pub async fn fetch_all(&self) -> Result<Vec<ExpenseRow>, SheetError> {
        self.store
            .list_rows(&self.table)
            .await?
            .into_iter()
            .map(|row| serde_json::from_value(row).map_err(|e| SheetError::Decode(e.to_string())))
            .collect()
    }

    /// Appends one expense.
    ///
    /// # Errors
    ///
    /// Returns the store error if the append fails.
    pub async fn append(&self, record: &ExpenseRecord) -> Result<(), SheetError> {
        let row = serde_json::to_value(record).map_err(|e| SheetError::Decode(e.to_string()))?;
        self.store.append_row(&self.table, row).await?;
        info!(month = %record.month, category = %record.category, "Expense recorded");
        Ok(())
    }
}
