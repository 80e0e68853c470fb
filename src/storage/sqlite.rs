//! SQLite storage backend using sqlx.
//!
//! Provides `SqliteInvoiceStore`, backed by a local SQLite file via
//! `sqlx::SqlitePool`.
//!
//! # Schema
//!
//! A single `invoices` table with six columns:
//!
//! - `invoice_id TEXT PRIMARY KEY` (hyphenated UUID)
//! - `client_name TEXT`
//! - `amount_due REAL`
//! - `due_date TEXT` (`YYYY-MM-DD`)
//! - `category TEXT`, `status TEXT` (enumeration labels)
//!
//! The pool holds a single connection: the pipeline never issues two
//! statements at once.

use crate::core::{
    Category, INVOICES_TABLE, Invoice, InvoiceStatus, InvoiceStore, StorageError, StorageResult,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use uuid::Uuid;

/// Default location of the store, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://statement.db";

const DATE_FORMAT: &str = "%Y-%m-%d";

type InvoiceRow = (String, Option<String>, Option<f64>, Option<String>, Option<String>, Option<String>);

/// Invoice store backed by SQLite.
///
/// # Example
///
/// ```rust,ignore
/// use financedash::storage::SqliteInvoiceStore;
///
/// let store = SqliteInvoiceStore::connect("sqlite://statement.db").await?;
/// store.ensure_schema().await?;
/// ```
#[derive(Clone, Debug)]
pub struct SqliteInvoiceStore {
    pool: SqlitePool,
    location: String,
}

impl SqliteInvoiceStore {
    /// Open (creating if missing) the database at `url`.
    pub async fn connect(url: &str) -> StorageResult<Self> {
        let unavailable = |message: String| StorageError::Unavailable {
            location: url.to_string(),
            message,
        };

        let options = SqliteConnectOptions::from_str(url)
            .map_err(|e| unavailable(e.to_string()))?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| unavailable(e.to_string()))?;

        tracing::debug!(location = %url, "Opened SQLite store");

        Ok(Self {
            pool,
            location: url.to_string(),
        })
    }

    /// Wrap an existing pool.
    pub fn new(pool: SqlitePool, location: impl Into<String>) -> Self {
        Self {
            pool,
            location: location.into(),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Close the underlying pool, waiting for the connection to be released.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    fn decode_row(row: InvoiceRow) -> StorageResult<Invoice> {
        let (id, client_name, amount_due, due_date, category, status) = row;
        let integrity = |message: String| StorageError::IntegrityError { message };

        let invoice_id = Uuid::parse_str(&id)
            .map_err(|e| integrity(format!("invoice_id '{}': {}", id, e)))?;
        let client_name =
            client_name.ok_or_else(|| integrity(format!("invoice {} has no client_name", id)))?;
        let amount_due =
            amount_due.ok_or_else(|| integrity(format!("invoice {} has no amount_due", id)))?;
        let due_date = due_date
            .ok_or_else(|| integrity(format!("invoice {} has no due_date", id)))
            .and_then(|raw| {
                NaiveDate::parse_from_str(&raw, DATE_FORMAT)
                    .map_err(|e| integrity(format!("invoice {} due_date '{}': {}", id, raw, e)))
            })?;
        let category = category
            .ok_or_else(|| integrity(format!("invoice {} has no category", id)))
            .and_then(|raw| {
                Category::from_str(&raw).map_err(|e| integrity(format!("invoice {}: {}", id, e)))
            })?;
        let status = status
            .ok_or_else(|| integrity(format!("invoice {} has no status", id)))
            .and_then(|raw| {
                InvoiceStatus::from_str(&raw)
                    .map_err(|e| integrity(format!("invoice {}: {}", id, e)))
            })?;

        Ok(Invoice {
            invoice_id,
            client_name,
            amount_due,
            due_date,
            category,
            status,
        })
    }
}

#[async_trait]
impl InvoiceStore for SqliteInvoiceStore {
    async fn ensure_schema(&self) -> StorageResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS invoices (
                invoice_id TEXT PRIMARY KEY,
                client_name TEXT,
                amount_due REAL,
                due_date TEXT,
                category TEXT,
                status TEXT
            )",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Unavailable {
            location: self.location.clone(),
            message: format!("Failed to create {} table: {}", INVOICES_TABLE, e),
        })?;

        tracing::debug!(table = INVOICES_TABLE, "Schema ensured");
        Ok(())
    }

    async fn insert_batch(&self, invoices: &[Invoice]) -> StorageResult<usize> {
        let count = invoices.len();
        let write_failure = |e: sqlx::Error| StorageError::WriteFailure {
            count,
            message: e.to_string(),
        };

        // Dropping the transaction on an early return rolls it back.
        let mut tx = self.pool.begin().await.map_err(write_failure)?;

        for invoice in invoices {
            sqlx::query(
                "INSERT INTO invoices (invoice_id, client_name, amount_due, due_date, category, status) \
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(invoice.invoice_id.to_string())
            .bind(&invoice.client_name)
            .bind(invoice.amount_due)
            .bind(invoice.due_date.format(DATE_FORMAT).to_string())
            .bind(invoice.category.as_str())
            .bind(invoice.status.as_str())
            .execute(&mut *tx)
            .await
            .map_err(write_failure)?;
        }

        tx.commit().await.map_err(write_failure)?;

        tracing::debug!(count, "Committed invoice batch");
        Ok(count)
    }

    async fn list(&self) -> StorageResult<Vec<Invoice>> {
        let rows = sqlx::query_as::<_, InvoiceRow>(
            "SELECT invoice_id, client_name, amount_due, due_date, category, status FROM invoices",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::QueryError {
            operation: "list".to_string(),
            message: e.to_string(),
        })?;

        rows.into_iter().map(Self::decode_row).collect()
    }

    async fn count(&self) -> StorageResult<usize> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM invoices")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StorageError::QueryError {
                operation: "count".to_string(),
                message: e.to_string(),
            })?;

        Ok(count as usize)
    }
}
