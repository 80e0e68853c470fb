//! Macro-generated test suite for `InvoiceStore` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use financedash::storage::InMemoryInvoiceStore;
//!
//! invoice_store_tests!(InMemoryInvoiceStore::new());
//! ```
//!
//! # Generated Tests
//!
//! ## Schema
//! - `test_ensure_schema_is_idempotent` — repeated calls keep rows
//! - `test_list_empty_after_schema` — fresh table lists nothing
//! - `test_insert_before_schema_fails` — no table, no write
//!
//! ## Batches
//! - `test_insert_empty_batch` — zero rows is a valid batch
//! - `test_insert_and_list_round_trip` — all six columns survive storage
//! - `test_batches_append` — a second batch adds to the first
//! - `test_duplicate_within_batch_is_atomic` — nothing from a bad batch lands
//! - `test_duplicate_of_existing_row_is_atomic` — same, against stored rows

/// Generate a full `InvoiceStore` conformance test suite.
///
/// `$factory` is re-evaluated for each test and must evaluate to a fresh,
/// empty store (or something that derefs to one).
#[macro_export]
macro_rules! invoice_store_tests {
    ($factory:expr) => {
        mod invoice_store_contract_tests {
            use super::*;
            use financedash::core::{InvoiceStore, StorageError};

            // ==================================================================
            // Schema
            // ==================================================================

            #[tokio::test]
            async fn test_ensure_schema_is_idempotent() {
                let store = $factory;
                store.ensure_schema().await.unwrap();
                store.ensure_schema().await.unwrap();

                store.insert_batch(&sample_batch(1, 5)).await.unwrap();
                store.ensure_schema().await.unwrap();

                assert_eq!(store.count().await.unwrap(), 5);
                assert_count(&store.list().await.unwrap(), 5);
            }

            #[tokio::test]
            async fn test_list_empty_after_schema() {
                let store = $factory;
                store.ensure_schema().await.unwrap();

                assert!(store.list().await.unwrap().is_empty());
                assert_eq!(store.count().await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_insert_before_schema_fails() {
                let store = $factory;

                let err = store.insert_batch(&sample_batch(2, 3)).await.unwrap_err();
                assert!(
                    matches!(err, StorageError::WriteFailure { count: 3, .. }),
                    "unexpected error: {:?}",
                    err
                );
            }

            // ==================================================================
            // Batches
            // ==================================================================

            #[tokio::test]
            async fn test_insert_empty_batch() {
                let store = $factory;
                store.ensure_schema().await.unwrap();

                assert_eq!(store.insert_batch(&[]).await.unwrap(), 0);
                assert!(store.list().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_insert_and_list_round_trip() {
                let store = $factory;
                store.ensure_schema().await.unwrap();
                let batch = sample_batch(3, 25);

                assert_eq!(store.insert_batch(&batch).await.unwrap(), 25);

                let stored = store.list().await.unwrap();
                assert_eq!(sorted_by_id(stored), sorted_by_id(batch));
            }

            #[tokio::test]
            async fn test_batches_append() {
                let store = $factory;
                store.ensure_schema().await.unwrap();

                store.insert_batch(&sample_batch(4, 25)).await.unwrap();
                store.insert_batch(&sample_batch(5, 25)).await.unwrap();

                let stored = store.list().await.unwrap();
                assert_count(&stored, 50);
                assert_unique_ids(&stored);
            }

            #[tokio::test]
            async fn test_duplicate_within_batch_is_atomic() {
                let store = $factory;
                store.ensure_schema().await.unwrap();

                let mut batch = sample_batch(6, 10);
                batch.push(batch[3].clone());

                let err = store.insert_batch(&batch).await.unwrap_err();
                assert!(
                    matches!(err, StorageError::WriteFailure { count: 11, .. }),
                    "unexpected error: {:?}",
                    err
                );
                assert!(store.list().await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_duplicate_of_existing_row_is_atomic() {
                let store = $factory;
                store.ensure_schema().await.unwrap();

                let first = sample_batch(7, 5);
                store.insert_batch(&first).await.unwrap();

                let mut second = sample_batch(8, 5);
                second.push(first[0].clone());
                assert!(store.insert_batch(&second).await.is_err());

                let stored = store.list().await.unwrap();
                assert_eq!(sorted_by_id(stored), sorted_by_id(first));
            }
        }
    };
}
