//! Quote routes, including conversion to an invoice.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use invoicer_core::quote::{
    CreateQuoteInput, Quote, QuoteDraft, QuoteFilter, QuoteStatus, UpdateQuoteInput,
};
use invoicer_shared::types::QuoteId;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::{AppState, error::ApiError};

/// Creates the quote routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/quotes", get(list_quotes).post(create_quote))
        .route("/quotes/new", get(new_quote))
        .route(
            "/quotes/{quote_id}",
            get(get_quote).put(update_quote).delete(delete_quote),
        )
        .route("/quotes/{quote_id}/convert", post(convert_quote))
}

/// Query parameters for listing quotes.
#[derive(Debug, Deserialize)]
pub struct ListQuotesQuery {
    /// Matches client name or number.
    pub search: Option<String>,
    /// Exact status.
    pub status: Option<QuoteStatus>,
}

/// GET /quotes
async fn list_quotes(
    State(state): State<AppState>,
    Query(query): Query<ListQuotesQuery>,
) -> impl IntoResponse {
    let filter = QuoteFilter::new(query.search.as_deref(), query.status);
    Json(json!({ "quotes": state.store.quotes.list(&filter).await }))
}

/// GET /quotes/new
async fn new_quote(State(state): State<AppState>) -> Json<QuoteDraft> {
    Json(QuoteDraft::new(state.store.rules(), Utc::now()))
}

/// POST /quotes
async fn create_quote(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuoteInput>,
) -> Result<impl IntoResponse, ApiError> {
    let quote = state.store.quotes.create(payload).await?;
    info!(quote_id = %quote.id, status = quote.status.as_str(), "Quote created via API");
    Ok((StatusCode::CREATED, Json(quote)))
}

/// GET /quotes/{quote_id}
async fn get_quote(
    State(state): State<AppState>,
    Path(quote_id): Path<QuoteId>,
) -> Result<Json<Quote>, ApiError> {
    state
        .store
        .quotes
        .get(quote_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("quote", quote_id))
}

/// PUT /quotes/{quote_id}
async fn update_quote(
    State(state): State<AppState>,
    Path(quote_id): Path<QuoteId>,
    Json(payload): Json<UpdateQuoteInput>,
) -> Result<Json<Quote>, ApiError> {
    Ok(Json(state.store.quotes.update(quote_id, payload).await?))
}

/// DELETE /quotes/{quote_id}
async fn delete_quote(
    State(state): State<AppState>,
    Path(quote_id): Path<QuoteId>,
) -> Result<StatusCode, ApiError> {
    state.store.quotes.delete(quote_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /quotes/{quote_id}/convert
///
/// Builds an invoice from the quote and saves it as a draft. The quote
/// itself is left untouched.
async fn convert_quote(
    State(state): State<AppState>,
    Path(quote_id): Path<QuoteId>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(input) = state.store.quotes.convert_to_invoice(quote_id).await else {
        return Err(ApiError::not_found("quote", quote_id));
    };

    let invoice = state
        .store
        .invoices
        .create(input)
        .await
        .inspect_err(|e| {
            error!(quote_id = %quote_id, error = %e, "Failed to create invoice from quote");
        })?;

    info!(
        quote_id = %quote_id,
        invoice_id = %invoice.id,
        number = %invoice.number,
        "Quote converted to invoice"
    );
    Ok((StatusCode::CREATED, Json(invoice)))
}
