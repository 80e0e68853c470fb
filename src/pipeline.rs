//! The run sequence: initialize → generate → load → partition.

use crate::core::{Category, InvoiceStore, StorageResult};
use crate::dashboard::DashboardSnapshot;
use crate::generator::InvoiceGenerator;
use crate::ledger::InvoiceLedger;
use rand::Rng;
use serde::Serialize;

/// Row counts observed by one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PipelineReport {
    pub inserted: usize,
    pub total: usize,
    pub receivable: usize,
    pub payable: usize,
}

/// Run the whole pipeline once.
///
/// Appends `batch_size` fresh invoices to whatever the store already holds.
/// Any storage error aborts before a snapshot is produced.
pub async fn run<S, R>(
    ledger: &InvoiceLedger<S>,
    generator: &mut InvoiceGenerator<R>,
    batch_size: usize,
) -> StorageResult<(DashboardSnapshot, PipelineReport)>
where
    S: InvoiceStore,
    R: Rng,
{
    ledger.initialize().await?;
    let inserted = ledger.generate(generator, batch_size).await?.len();

    let frame = ledger.load().await?;
    let snapshot = DashboardSnapshot::from_frame(&frame);

    let report = PipelineReport {
        inserted,
        total: frame.len(),
        receivable: snapshot.view(Category::Receivable).table.len(),
        payable: snapshot.view(Category::Payable).table.len(),
    };

    tracing::info!(
        inserted = report.inserted,
        total = report.total,
        receivable = report.receivable,
        payable = report.payable,
        "Invoice pipeline complete"
    );

    Ok((snapshot, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryInvoiceStore;

    #[tokio::test]
    async fn test_run_against_uninitialized_store() {
        let ledger = InvoiceLedger::new(InMemoryInvoiceStore::new());
        let mut generator = InvoiceGenerator::seeded(3);

        let (snapshot, report) = run(&ledger, &mut generator, 25).await.unwrap();
        assert_eq!(report.inserted, 25);
        assert_eq!(report.total, 25);
        assert_eq!(report.receivable + report.payable, 25);
        assert_eq!(snapshot.all.len(), 25);
    }
}
