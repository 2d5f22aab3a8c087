//! Summary publishing.

use std::sync::Arc;

use tally_core::reports::ReportSummary;
use tally_core::summary::summary_rows;
use tally_shared::AppError;
use thiserror::Error;
use tracing::{error, info};

use crate::error::SheetError;
use crate::store::{RowStore, SheetTable};

/// A summary write failed part-way.
///
/// Rows written before the failure stay in the store; nothing is rolled back.
#[derive(Debug, Error)]
#[error("wrote {written} of {total} summary rows: {source}")]
pub struct PublishError {
    /// Rows successfully written before the failure.
    pub written: usize,
    /// Rows the summary consists of.
    pub total: usize,
    /// The failing write.
    #[source]
    pub source: SheetError,
}

impl From<PublishError> for AppError {
    fn from(err: PublishError) -> Self {
        Self::ExternalService(err.to_string())
    }
}

/// Appends report summaries to the summaries table.
#[derive(Clone)]
pub struct SummaryPublisher {
    store: Arc<dyn RowStore>,
    table: SheetTable,
}

impl SummaryPublisher {
    /// Creates a new publisher.
    #[must_use]
    pub fn new(store: Arc<dyn RowStore>, table: SheetTable) -> Self {
        Self { store, table }
    }

    /// Writes the summary rows one by one, in order.
    ///
    /// Returns the number of rows written. Stops at the first failing write.
    ///
    /// # Errors
    ///
    /// Returns `PublishError` carrying how many rows were already written.
    pub async fn publish(&self, month: &str, summary: &ReportSummary) -> Result<usize, PublishError> {
        let rows = summary_rows(month, summary);
        let total = rows.len();

        for (written, row) in rows.iter().enumerate() {
            let value = serde_json::to_value(row).map_err(|e| PublishError {
                written,
                total,
                source: SheetError::Decode(e.to_string()),
            })?;

            if let Err(source) = self.store.append_row(&self.table, value).await {
                error!(month, written, total, error = %source, "Summary write failed");
                return Err(PublishError {
                    written,
                    total,
                    source,
                });
            }
        }

        info!(month, rows = total, "Summary saved");
        Ok(total)
    }
}
