//! Billing preview route.
//!
//! Recomputes row totals and document totals for an unsaved form.

use axum::{Json, Router, extract::State, routing::post};
use invoicer_core::billing::{LineItem, LineItemInput, PricedLines};
use invoicer_shared::types::ProductId;
use serde::Deserialize;

use crate::{AppState, error::ApiError};

/// Creates the billing routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/billing/preview", post(preview))
}

/// Request body for a totals preview.
#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    /// Rows as currently entered.
    #[serde(default)]
    pub items: Vec<LineItemInput>,
    /// Catalog products to append, one unit each at list price.
    #[serde(default)]
    pub products: Vec<ProductId>,
}

/// POST /billing/preview
async fn preview(
    State(state): State<AppState>,
    Json(payload): Json<PreviewRequest>,
) -> Result<Json<PricedLines>, ApiError> {
    let mut items = payload
        .items
        .into_iter()
        .map(LineItem::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    for product_id in payload.products {
        let product = state
            .store
            .products
            .get(product_id)
            .await
            .ok_or_else(|| ApiError::not_found("product", product_id))?;
        items.push(LineItem::from_product(&product));
    }

    Ok(Json(PricedLines::from_items(items, &state.store.rules().tax)?))
}
