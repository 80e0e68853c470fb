//! # financedash
//!
//! Synthetic invoice dashboard data: generate randomized invoice records,
//! append them to a local SQLite store, read them back and split them by
//! category and status for display.
//!
//! ## Pipeline
//!
//! 1. [`InvoiceLedger::initialize`](ledger::InvoiceLedger::initialize)
//!    creates the `invoices` table if absent
//! 2. [`InvoiceLedger::generate`](ledger::InvoiceLedger::generate) appends
//!    a batch from a seedable [`InvoiceGenerator`](generator::InvoiceGenerator)
//! 3. [`InvoiceLedger::load`](ledger::InvoiceLedger::load) reads every row,
//!    memoized until the next write
//! 4. [`DashboardSnapshot`](dashboard::DashboardSnapshot) partitions the rows
//!    and tallies statuses per category
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use financedash::prelude::*;
//!
//! let store = SqliteInvoiceStore::connect("sqlite://statement.db").await?;
//! let ledger = InvoiceLedger::new(store);
//! let mut generator = InvoiceGenerator::seeded(42);
//!
//! let (snapshot, report) = pipeline::run(&ledger, &mut generator, 25).await?;
//! println!("{} receivable / {} payable", report.receivable, report.payable);
//! ```

pub mod config;
pub mod core;
pub mod dashboard;
pub mod generator;
pub mod ledger;
pub mod pipeline;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    pub use crate::config::DashboardConfig;
    pub use crate::core::{
        Category, ConfigError, DashboardError, Invoice, InvoiceStatus, InvoiceStore,
        StorageError, StorageResult,
    };
    pub use crate::dashboard::{CategoryView, DashboardSnapshot, InvoiceTable};
    pub use crate::generator::{DEFAULT_BATCH_SIZE, InvoiceGenerator};
    pub use crate::ledger::{InvoiceFrame, InvoiceLedger, StatusTally, TallySlice};
    pub use crate::pipeline::{self, PipelineReport};
    pub use crate::server::build_router;
    pub use crate::storage::{InMemoryInvoiceStore, SqliteInvoiceStore};
}
