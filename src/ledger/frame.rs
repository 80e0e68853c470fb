//! In-memory invoice table and its derived views

use crate::core::{Category, INVOICE_COLUMNS, Invoice, InvoiceStatus};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// All loaded invoices, in storage order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceFrame {
    rows: Vec<Invoice>,
}

impl InvoiceFrame {
    pub fn new(rows: Vec<Invoice>) -> Self {
        Self { rows }
    }

    pub fn columns() -> &'static [&'static str; 6] {
        &INVOICE_COLUMNS
    }

    pub fn rows(&self) -> &[Invoice] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Invoice> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose category equals `category`.
    pub fn partition(&self, category: Category) -> InvoiceFrame {
        self.rows
            .iter()
            .filter(|row| row.category == category)
            .cloned()
            .collect()
    }

    /// Count rows per status, over statuses that occur only.
    pub fn status_tally(&self) -> StatusTally {
        let mut counts = IndexMap::new();
        for row in &self.rows {
            *counts.entry(row.status).or_insert(0) += 1;
        }
        StatusTally { counts }
    }

    /// Sum of `amount_due` over all rows.
    pub fn total_amount(&self) -> f64 {
        self.rows.iter().map(|row| row.amount_due).sum()
    }
}

impl FromIterator<Invoice> for InvoiceFrame {
    fn from_iter<I: IntoIterator<Item = Invoice>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One pie slice: a status label and how many rows carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallySlice {
    pub status: InvoiceStatus,
    pub count: usize,
}

/// Row count per status present in a frame.
///
/// Statuses that never occur have no entry; there is no zero-fill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTally {
    counts: IndexMap<InvoiceStatus, usize>,
}

impl StatusTally {
    pub fn get(&self, status: InvoiceStatus) -> Option<usize> {
        self.counts.get(&status).copied()
    }

    pub fn contains(&self, status: InvoiceStatus) -> bool {
        self.counts.contains_key(&status)
    }

    pub fn statuses(&self) -> impl Iterator<Item = InvoiceStatus> + '_ {
        self.counts.keys().copied()
    }

    /// Number of distinct statuses present.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts; equals the tallied frame's row count.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Label/count pairs, largest first. Ties keep status declaration order.
    pub fn slices(&self) -> Vec<TallySlice> {
        let mut slices: Vec<TallySlice> = self
            .counts
            .iter()
            .map(|(&status, &count)| TallySlice { status, count })
            .collect();
        slices.sort_by(|a, b| b.count.cmp(&a.count).then(a.status.cmp(&b.status)));
        slices
    }
}
