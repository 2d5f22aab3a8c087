//! In-memory row store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::SheetError;
use crate::store::{RowStore, SheetTable};

/// Row store keeping tabs in memory.
///
/// Appended rows get an `id` like the remote API assigns. Failures can be
/// injected to exercise partial writes.
#[derive(Debug, Default)]
pub struct InMemoryRowStore {
    tabs: RwLock<HashMap<String, Vec<Value>>>,
    writes: AtomicUsize,
    fail_writes_after: Option<usize>,
    fail_reads: bool,
}

impl InMemoryRowStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds `tab` with rows.
    #[must_use]
    pub fn with_rows(mut self, tab: &str, rows: Vec<Value>) -> Self {
        self.tabs
            .get_mut()
            .entry(tab.to_string())
            .or_default()
            .extend(rows);
        self
    }

    /// Rejects every write after the first `count` successful ones.
    #[must_use]
    pub fn failing_writes_after(mut self, count: usize) -> Self {
        self.fail_writes_after = Some(count);
        self
    }

    /// Rejects every listing.
    #[must_use]
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Snapshot of the rows currently stored in `tab`.
    pub async fn rows(&self, tab: &str) -> Vec<Value> {
        self.tabs.read().await.get(tab).cloned().unwrap_or_default()
    }
}

#[async_trait]
impl RowStore for InMemoryRowStore {
    async fn list_rows(&self, table: &SheetTable) -> Result<Vec<Value>, SheetError> {
        if self.fail_reads {
            return Err(SheetError::Request("row store unavailable".to_string()));
        }
        Ok(self.rows(&table.tab).await)
    }

    async fn append_row(&self, table: &SheetTable, mut row: Value) -> Result<(), SheetError> {
        if let Some(limit) = self.fail_writes_after {
            if self.writes.load(Ordering::SeqCst) >= limit {
                return Err(SheetError::Status {
                    status: 503,
                    body: "write rejected".to_string(),
                });
            }
        }

        let mut tabs = self.tabs.write().await;
        let rows = tabs.entry(table.tab.clone()).or_default();
        if let Value::Object(fields) = &mut row {
            fields.insert("id".to_string(), Value::from(rows.len() + 2));
        }
        rows.push(row);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_seeded_rows_are_listed() {
        let store = InMemoryRowStore::new().with_rows("sheet1", vec![json!({"item": "Coffee"})]);

        let rows = store
            .list_rows(&SheetTable::expenses("sheet1"))
            .await
            .unwrap();

        assert_eq!(rows, vec![json!({"item": "Coffee"})]);
        assert!(store.rows("summaries").await.is_empty());
    }

    #[tokio::test]
    async fn test_append_assigns_id() {
        let store = InMemoryRowStore::new();
        let table = SheetTable::summaries("summaries");

        store.append_row(&table, json!({"item": "a"})).await.unwrap();
        store.append_row(&table, json!({"item": "b"})).await.unwrap();

        let rows = store.rows("summaries").await;
        assert_eq!(rows[0]["id"], 2);
        assert_eq!(rows[1]["id"], 3);
    }

    #[tokio::test]
    async fn test_write_failure_injection() {
        let store = InMemoryRowStore::new().failing_writes_after(1);
        let table = SheetTable::summaries("summaries");

        assert!(store.append_row(&table, json!({"item": "a"})).await.is_ok());
        assert!(store.append_row(&table, json!({"item": "b"})).await.is_err());
        assert_eq!(store.rows("summaries").await.len(), 1);
    }

    #[tokio::test]
    async fn test_read_failure_injection() {
        let store = InMemoryRowStore::new().failing_reads();
        assert!(
            store
                .list_rows(&SheetTable::expenses("sheet1"))
                .await
                .is_err()
        );
    }
}
