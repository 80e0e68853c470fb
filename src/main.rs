use anyhow::Result;
use financedash::prelude::*;
use financedash::server;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = DashboardConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = SqliteInvoiceStore::connect(&config.database_url).await?;
    let ledger = InvoiceLedger::new(store);

    let mut generator = match config.seed {
        Some(seed) => InvoiceGenerator::seeded(seed),
        None => InvoiceGenerator::from_entropy(),
    };

    let (snapshot, _report) = pipeline::run(&ledger, &mut generator, config.batch_size).await?;

    for category in Category::ALL {
        let view = snapshot.view(category);
        let tally: Vec<String> = view
            .tally
            .iter()
            .map(|slice| format!("{}={}", slice.status, slice.count))
            .collect();
        tracing::info!(
            "{}: {} invoices [{}]",
            view.title,
            view.table.len(),
            tally.join(", ")
        );
    }

    server::serve(Arc::new(ledger), &config.bind_address).await
}
