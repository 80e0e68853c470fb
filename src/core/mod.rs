//! Core module containing the invoice model, errors and the storage trait

pub mod error;
pub mod invoice;
pub mod service;

pub use error::{ConfigError, DashboardError, StorageError, StorageResult};
pub use invoice::{Category, INVOICE_COLUMNS, Invoice, InvoiceStatus, UnknownTag, round_cents};
pub use service::{INVOICES_TABLE, InvoiceStore};
