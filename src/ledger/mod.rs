//! Invoice ledger: writes through a store, memoized reads, derived views.
//!
//! Every write made through the ledger invalidates the cached frame, so
//! `load` only goes back to storage after the data actually changed. Writes
//! made directly on the store are not seen until [`InvoiceLedger::invalidate`]
//! is called.

pub mod cache;
pub mod frame;

pub use cache::FrameCache;
pub use frame::{InvoiceFrame, StatusTally, TallySlice};

use crate::core::{Invoice, InvoiceStore, StorageResult};
use crate::dashboard::DashboardSnapshot;
use crate::generator::InvoiceGenerator;
use rand::Rng;
use std::sync::Arc;

pub struct InvoiceLedger<S> {
    store: S,
    cache: FrameCache,
}

impl<S: InvoiceStore> InvoiceLedger<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: FrameCache::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cache(&self) -> &FrameCache {
        &self.cache
    }

    /// Create the invoices table if absent.
    pub async fn initialize(&self) -> StorageResult<()> {
        self.store.ensure_schema().await?;
        self.cache.invalidate();
        Ok(())
    }

    /// Append a batch in one transaction.
    pub async fn append(&self, invoices: &[Invoice]) -> StorageResult<usize> {
        let written = self.store.insert_batch(invoices).await;
        // A failed batch leaves storage untouched, but drop the frame anyway.
        self.cache.invalidate();
        written
    }

    /// Generate `count` invoices and append them as one batch.
    pub async fn generate<R: Rng>(
        &self,
        generator: &mut InvoiceGenerator<R>,
        count: usize,
    ) -> StorageResult<Vec<Invoice>> {
        let batch = generator.generate_batch(count);
        self.append(&batch).await?;
        tracing::info!(count, "Inserted synthetic invoices");
        Ok(batch)
    }

    /// All stored invoices, served from cache when no write happened since
    /// the last load.
    pub async fn load(&self) -> StorageResult<Arc<InvoiceFrame>> {
        if let Some(frame) = self.cache.get() {
            tracing::debug!(rows = frame.len(), "Invoice frame cache hit");
            return Ok(frame);
        }

        let frame = Arc::new(InvoiceFrame::new(self.store.list().await?));
        tracing::debug!(rows = frame.len(), "Invoice frame loaded from storage");
        self.cache.store(frame.clone());
        Ok(frame)
    }

    /// Drop the cached frame so the next `load` reads storage.
    pub fn invalidate(&self) {
        self.cache.invalidate();
    }

    pub async fn snapshot(&self) -> StorageResult<DashboardSnapshot> {
        Ok(DashboardSnapshot::from_frame(&*self.load().await?))
    }
}
