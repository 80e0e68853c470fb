//! Dashboard payload handed to the presentation layer.
//!
//! Three tabs, as in the original dashboard: every invoice, receivables and
//! payables. Each category tab carries its status tally as label/count
//! pairs ready for a pie chart.

use crate::core::{Category, INVOICE_COLUMNS, Invoice};
use crate::ledger::{InvoiceFrame, TallySlice};
use serde::{Deserialize, Serialize};

/// A table with the six invoice columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTable {
    pub columns: Vec<String>,
    pub rows: Vec<Invoice>,
}

impl InvoiceTable {
    pub fn from_frame(frame: &InvoiceFrame) -> Self {
        Self {
            columns: INVOICE_COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: frame.rows().to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One category tab: its rows and its status distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryView {
    pub category: Category,
    pub title: String,
    pub table: InvoiceTable,
    pub tally: Vec<TallySlice>,
}

impl CategoryView {
    pub fn from_frame(frame: &InvoiceFrame, category: Category) -> Self {
        let partition = frame.partition(category);
        Self {
            category,
            title: category_title(category).to_string(),
            table: InvoiceTable::from_frame(&partition),
            tally: partition.status_tally().slices(),
        }
    }
}

/// Tab title for a category.
pub fn category_title(category: Category) -> &'static str {
    match category {
        Category::Receivable => "Accounts Receivable",
        Category::Payable => "Accounts Payable",
    }
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub title: String,
    pub all: InvoiceTable,
    pub receivable: CategoryView,
    pub payable: CategoryView,
}

impl DashboardSnapshot {
    pub fn from_frame(frame: &InvoiceFrame) -> Self {
        Self {
            title: "All Invoices".to_string(),
            all: InvoiceTable::from_frame(frame),
            receivable: CategoryView::from_frame(frame, Category::Receivable),
            payable: CategoryView::from_frame(frame, Category::Payable),
        }
    }

    pub fn view(&self, category: Category) -> &CategoryView {
        match category {
            Category::Receivable => &self.receivable,
            Category::Payable => &self.payable,
        }
    }
}
