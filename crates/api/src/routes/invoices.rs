//! Invoice routes.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use invoicer_core::invoice::{
    CreateInvoiceInput, Invoice, InvoiceDraft, InvoiceFilter, InvoiceStatus, UpdateInvoiceInput,
};
use invoicer_shared::types::{ClientId, InvoiceId};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{AppState, error::ApiError};

/// Creates the invoice routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route("/invoices/new", get(new_invoice))
        .route(
            "/invoices/{invoice_id}",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
}

/// Query parameters for listing invoices.
#[derive(Debug, Deserialize)]
pub struct ListInvoicesQuery {
    /// Matches client name or number.
    pub search: Option<String>,
    /// Exact status.
    pub status: Option<InvoiceStatus>,
}

/// Query parameters for a new invoice form.
#[derive(Debug, Deserialize)]
pub struct NewInvoiceQuery {
    /// Client to preselect. Anything that is not a client id is ignored.
    pub client: Option<String>,
}

/// GET /invoices
async fn list_invoices(
    State(state): State<AppState>,
    Query(query): Query<ListInvoicesQuery>,
) -> impl IntoResponse {
    let filter = InvoiceFilter::new(query.search.as_deref(), query.status);
    Json(json!({ "invoices": state.store.invoices.list(&filter).await }))
}

/// GET /invoices/new?client={id}
async fn new_invoice(
    State(state): State<AppState>,
    Query(query): Query<NewInvoiceQuery>,
) -> Json<InvoiceDraft> {
    let client = query
        .client
        .as_deref()
        .and_then(|raw| ClientId::from_str(raw.trim()).ok());
    Json(state.store.invoice_draft(client).await)
}

/// POST /invoices
async fn create_invoice(
    State(state): State<AppState>,
    Json(payload): Json<CreateInvoiceInput>,
) -> Result<impl IntoResponse, ApiError> {
    let invoice = state.store.invoices.create(payload).await?;
    info!(
        invoice_id = %invoice.id,
        status = invoice.status.as_str(),
        "Invoice created via API"
    );
    Ok((StatusCode::CREATED, Json(invoice)))
}

/// GET /invoices/{invoice_id}
async fn get_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<InvoiceId>,
) -> Result<Json<Invoice>, ApiError> {
    state
        .store
        .invoices
        .get(invoice_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("invoice", invoice_id))
}

/// PUT /invoices/{invoice_id}
async fn update_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<InvoiceId>,
    Json(payload): Json<UpdateInvoiceInput>,
) -> Result<Json<Invoice>, ApiError> {
    Ok(Json(state.store.invoices.update(invoice_id, payload).await?))
}

/// DELETE /invoices/{invoice_id}
async fn delete_invoice(
    State(state): State<AppState>,
    Path(invoice_id): Path<InvoiceId>,
) -> Result<StatusCode, ApiError> {
    state.store.invoices.delete(invoice_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
