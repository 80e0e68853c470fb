//! Typed error handling for financedash
//!
//! # Error Categories
//!
//! - [`StorageError`]: the SQLite store (or its in-memory stand-in) failed
//! - [`ConfigError`]: configuration could not be read or is invalid
//! - [`DashboardError`]: top-level error, also rendered as an HTTP response
//!
//! An empty table is never an error: every view degrades to an empty result.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Result alias for store operations.
pub type StorageResult<T> = Result<T, StorageError>;

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by an [`InvoiceStore`](crate::core::InvoiceStore).
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store cannot be opened, created or have its schema written.
    #[error("Storage at '{location}' is unavailable: {message}")]
    Unavailable { location: String, message: String },

    /// A batch insert did not complete; none of its rows are visible.
    #[error("Failed to write batch of {count} invoices: {message}")]
    WriteFailure { count: usize, message: String },

    /// A read query failed.
    #[error("{operation} query failed: {message}")]
    QueryError { operation: String, message: String },

    /// A stored row could not be decoded into an invoice.
    #[error("Data integrity error: {message}")]
    IntegrityError { message: String },
}

impl StorageError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::Unavailable { .. } => "STORAGE_UNAVAILABLE",
            StorageError::WriteFailure { .. } => "STORAGE_WRITE_FAILURE",
            StorageError::QueryError { .. } => "STORAGE_QUERY_ERROR",
            StorageError::IntegrityError { .. } => "STORAGE_INTEGRITY_ERROR",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("IO error reading '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse config{}: {message}", file_suffix(.file))]
    Parse {
        file: Option<String>,
        message: String,
    },

    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

fn file_suffix(file: &Option<String>) -> String {
    file.as_ref()
        .map(|f| format!(" file '{}'", f))
        .unwrap_or_default()
}

// =============================================================================
// Dashboard Errors
// =============================================================================

/// The main error type for financedash
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A request named a category outside {Receivable, Payable}
    #[error("Unknown invoice category '{value}'")]
    InvalidCategory { value: String },

    /// Should not happen in normal operation
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl DashboardError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::Storage(StorageError::Unavailable { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            DashboardError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DashboardError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DashboardError::InvalidCategory { .. } => StatusCode::BAD_REQUEST,
            DashboardError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DashboardError::Storage(e) => e.error_code(),
            DashboardError::Config(_) => "CONFIG_ERROR",
            DashboardError::InvalidCategory { .. } => "INVALID_CATEGORY",
            DashboardError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        if self.status_code().is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        }
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_error_display() {
        let err = StorageError::Unavailable {
            location: "sqlite://statement.db".to_string(),
            message: "unable to open database file".to_string(),
        };
        assert!(err.to_string().contains("statement.db"));
        assert!(err.to_string().contains("unable to open"));
        assert_eq!(err.error_code(), "STORAGE_UNAVAILABLE");
    }

    #[test]
    fn test_storage_error_converts_into_dashboard_error() {
        let err: DashboardError = StorageError::WriteFailure {
            count: 25,
            message: "disk I/O error".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "STORAGE_WRITE_FAILURE");
        assert!(err.to_string().contains("25 invoices"));
    }

    #[test]
    fn test_unavailable_store_is_503() {
        let err = DashboardError::Storage(StorageError::Unavailable {
            location: "x".to_string(),
            message: "y".to_string(),
        });
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_invalid_category_response() {
        let err = DashboardError::InvalidCategory {
            value: "refunds".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        let response = err.to_response();
        assert_eq!(response.code, "INVALID_CATEGORY");
        assert!(response.message.contains("refunds"));
    }

    #[test]
    fn test_config_parse_error_mentions_file() {
        let err = ConfigError::Parse {
            file: Some("financedash.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse config file 'financedash.yaml': bad indent"
        );

        let err = ConfigError::Parse {
            file: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to parse config: bad indent");
    }
}
