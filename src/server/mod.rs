//! HTTP exposure of the dashboard snapshot
//!
//! Serves JSON only: tables and status tallies, nothing rendered.

pub mod handlers;
pub mod router;

pub use handlers::AppState;
pub use router::build_router;

use crate::core::InvoiceStore;
use crate::ledger::InvoiceLedger;
use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

/// Serve the dashboard API until Ctrl+C or SIGTERM.
pub async fn serve<S>(ledger: Arc<InvoiceLedger<S>>, addr: &str) -> Result<()>
where
    S: InvoiceStore + 'static,
{
    let app = build_router(ledger);
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("Dashboard listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, shutting down");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down");
        },
    }
}
