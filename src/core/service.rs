//! Storage trait for invoice records

use crate::core::error::StorageResult;
use crate::core::invoice::Invoice;
use async_trait::async_trait;

/// Name of the single persisted table.
pub const INVOICES_TABLE: &str = "invoices";

/// Service trait for persisting invoice records
///
/// Records are append-only: a store creates its table, appends batches and
/// reads everything back. Nothing is ever updated or deleted.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Ensure the `invoices` table exists.
    ///
    /// Idempotent: calling it again leaves schema and rows untouched.
    async fn ensure_schema(&self) -> StorageResult<()>;

    /// Append a batch atomically and return the number of rows written.
    ///
    /// Either every row of the batch becomes visible or none does.
    async fn insert_batch(&self, invoices: &[Invoice]) -> StorageResult<usize>;

    /// Read every stored invoice in storage order.
    async fn list(&self) -> StorageResult<Vec<Invoice>>;

    /// Number of stored invoices
    async fn count(&self) -> StorageResult<usize> {
        Ok(self.list().await?.len())
    }
}
