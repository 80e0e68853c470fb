//! In-memory implementation of InvoiceStore for testing and development

use crate::core::{Invoice, InvoiceStore, StorageError, StorageResult};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct Table {
    created: bool,
    rows: Vec<Invoice>,
}

/// In-memory invoice store
///
/// Mirrors the SQLite store's observable behavior: reads and writes before
/// `ensure_schema` fail, and a batch containing a duplicate id is rejected
/// as a whole.
#[derive(Clone, Default)]
pub struct InMemoryInvoiceStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryInvoiceStore {
    /// Create a new, schema-less in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    fn missing_table(operation: &str) -> StorageError {
        StorageError::QueryError {
            operation: operation.to_string(),
            message: "no such table: invoices".to_string(),
        }
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn ensure_schema(&self) -> StorageResult<()> {
        let mut table = self
            .table
            .write()
            .map_err(|e| StorageError::Unavailable {
                location: "memory".to_string(),
                message: format!("Failed to acquire write lock: {}", e),
            })?;

        table.created = true;
        Ok(())
    }

    async fn insert_batch(&self, invoices: &[Invoice]) -> StorageResult<usize> {
        let count = invoices.len();
        let mut table = self
            .table
            .write()
            .map_err(|e| StorageError::WriteFailure {
                count,
                message: format!("Failed to acquire write lock: {}", e),
            })?;

        if !table.created {
            return Err(StorageError::WriteFailure {
                count,
                message: "no such table: invoices".to_string(),
            });
        }

        let mut seen: HashSet<_> = table.rows.iter().map(|row| row.invoice_id).collect();
        if let Some(dup) = invoices.iter().find(|inv| !seen.insert(inv.invoice_id)) {
            return Err(StorageError::WriteFailure {
                count,
                message: format!(
                    "UNIQUE constraint failed: invoices.invoice_id ({})",
                    dup.invoice_id
                ),
            });
        }

        table.rows.extend_from_slice(invoices);
        Ok(count)
    }

    async fn list(&self) -> StorageResult<Vec<Invoice>> {
        let table = self.table.read().map_err(|e| StorageError::QueryError {
            operation: "list".to_string(),
            message: format!("Failed to acquire read lock: {}", e),
        })?;

        if !table.created {
            return Err(Self::missing_table("list"));
        }

        Ok(table.rows.clone())
    }

    async fn count(&self) -> StorageResult<usize> {
        let table = self.table.read().map_err(|e| StorageError::QueryError {
            operation: "count".to_string(),
            message: format!("Failed to acquire read lock: {}", e),
        })?;

        if !table.created {
            return Err(Self::missing_table("count"));
        }

        Ok(table.rows.len())
    }
}
