//! Dashboard HTTP handlers

use crate::core::{Category, DashboardError, InvoiceStore};
use crate::dashboard::{CategoryView, DashboardSnapshot, InvoiceTable};
use crate::ledger::{InvoiceLedger, TallySlice};
use axum::Json;
use axum::extract::{Path, State};
use serde_json::{Value, json};
use std::sync::Arc;

/// Shared handler state
pub struct AppState<S> {
    pub ledger: Arc<InvoiceLedger<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            ledger: self.ledger.clone(),
        }
    }
}

fn parse_category(raw: &str) -> Result<Category, DashboardError> {
    raw.parse().map_err(|_| DashboardError::InvalidCategory {
        value: raw.to_string(),
    })
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "financedash"
    }))
}

pub async fn get_dashboard<S: InvoiceStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<DashboardSnapshot>, DashboardError> {
    Ok(Json(state.ledger.snapshot().await?))
}

pub async fn list_invoices<S: InvoiceStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<InvoiceTable>, DashboardError> {
    let frame = state.ledger.load().await?;
    Ok(Json(InvoiceTable::from_frame(&frame)))
}

pub async fn list_category<S: InvoiceStore>(
    State(state): State<AppState<S>>,
    Path(category): Path<String>,
) -> Result<Json<CategoryView>, DashboardError> {
    let category = parse_category(&category)?;
    let frame = state.ledger.load().await?;
    Ok(Json(CategoryView::from_frame(&frame, category)))
}

pub async fn category_status<S: InvoiceStore>(
    State(state): State<AppState<S>>,
    Path(category): Path<String>,
) -> Result<Json<Vec<TallySlice>>, DashboardError> {
    let category = parse_category(&category)?;
    let frame = state.ledger.load().await?;
    Ok(Json(frame.partition(category).status_tally().slices()))
}
