//! Shared test harness for invoice store testing
//!
//! Provides seeded generators, a SQLite fixture backed by a temporary
//! directory, and assertion helpers.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod invoice_store_tests;

use chrono::NaiveDate;
use std::ops::Deref;
use std::path::PathBuf;
use tempfile::TempDir;
use uuid::Uuid;

use financedash::core::Invoice;
use financedash::generator::InvoiceGenerator;
use financedash::storage::SqliteInvoiceStore;

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

/// Fixed "today" so due-date assertions do not depend on the wall clock.
pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

pub fn seeded_generator(seed: u64) -> InvoiceGenerator {
    InvoiceGenerator::seeded(seed).with_reference_date(reference_date())
}

/// `n` invoices from a generator seeded with `seed`.
pub fn sample_batch(seed: u64, n: usize) -> Vec<Invoice> {
    seeded_generator(seed).generate_batch(n)
}

// ---------------------------------------------------------------------------
// SQLite fixture
// ---------------------------------------------------------------------------

/// A SQLite store whose file lives in a temporary directory.
///
/// The directory is removed when the fixture drops.
pub struct SqliteFixture {
    store: SqliteInvoiceStore,
    dir: TempDir,
}

impl SqliteFixture {
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = SqliteInvoiceStore::connect(&database_url(&dir))
            .await
            .expect("Failed to open SQLite store");
        Self { store, dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("statement.db")
    }

    pub fn url(&self) -> String {
        database_url(&self.dir)
    }

    /// Open a second, independent connection to the same file.
    pub async fn reopen(&self) -> SqliteInvoiceStore {
        SqliteInvoiceStore::connect(&self.url())
            .await
            .expect("Failed to reopen SQLite store")
    }
}

impl Deref for SqliteFixture {
    type Target = SqliteInvoiceStore;

    fn deref(&self) -> &Self::Target {
        &self.store
    }
}

fn database_url(dir: &TempDir) -> String {
    format!("sqlite://{}", dir.path().join("statement.db").display())
}

// ---------------------------------------------------------------------------
// Assertion helpers
// ---------------------------------------------------------------------------

/// Sort by id so lists from stores without ordering guarantees compare.
pub fn sorted_by_id(mut invoices: Vec<Invoice>) -> Vec<Invoice> {
    invoices.sort_by_key(|invoice| invoice.invoice_id);
    invoices
}

/// Assert that a list contains exactly `n` invoices.
pub fn assert_count<T>(list: &[T], expected: usize) {
    assert_eq!(
        list.len(),
        expected,
        "Expected {} items, got {}",
        expected,
        list.len()
    );
}

/// Assert that no two invoices share an id.
pub fn assert_unique_ids(invoices: &[Invoice]) {
    let mut ids: Vec<Uuid> = invoices.iter().map(|i| i.invoice_id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), invoices.len(), "Duplicate invoice ids found");
}
