//! Route table for the dashboard API

use super::handlers::{
    AppState, category_status, get_dashboard, health_check, list_category, list_invoices,
};
use crate::core::InvoiceStore;
use crate::ledger::InvoiceLedger;
use axum::{Router, routing::get};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Build the dashboard router over a shared ledger.
///
/// Routes:
/// - `GET /health`, `GET /healthz`
/// - `GET /dashboard`
/// - `GET /invoices`
/// - `GET /invoices/{category}`
/// - `GET /invoices/{category}/status`
pub fn build_router<S>(ledger: Arc<InvoiceLedger<S>>) -> Router
where
    S: InvoiceStore + 'static,
{
    let state = AppState { ledger };

    let invoice_routes = Router::new()
        .route("/dashboard", get(get_dashboard::<S>))
        .route("/invoices", get(list_invoices::<S>))
        .route("/invoices/{category}", get(list_category::<S>))
        .route("/invoices/{category}/status", get(category_status::<S>))
        .with_state(state);

    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .merge(invoice_routes)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
