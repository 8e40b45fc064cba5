//! Product catalog routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use invoicer_core::product::{
    CreateProductInput, Product, ProductFilter, ProductSort, UpdateProductInput,
};
use invoicer_shared::types::ProductId;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{AppState, error::ApiError};

/// Creates the product routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/categories", get(list_categories))
        .route(
            "/products/{product_id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// Query parameters for listing products.
#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    /// Matches name, description or category.
    pub search: Option<String>,
    /// Exact category, or `all`.
    pub category: Option<String>,
    /// Sort order.
    pub sort: Option<ProductSort>,
}

/// GET /products
async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> impl IntoResponse {
    let filter = ProductFilter::new(
        query.search.as_deref(),
        query.category.as_deref(),
        query.sort.unwrap_or_default(),
    );
    let products = state.store.products.list(&filter).await;
    Json(json!({ "products": products }))
}

/// GET /products/categories
async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "categories": state.store.products.categories().await,
        "known": Product::KNOWN_CATEGORIES,
    }))
}

/// POST /products
async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductInput>,
) -> Result<impl IntoResponse, ApiError> {
    let product = state.store.products.create(payload).await?;
    info!(product_id = %product.id, "Product created via API");
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /products/{product_id}
async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Result<Json<Product>, ApiError> {
    state
        .store
        .products
        .get(product_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("product", product_id))
}

/// PUT /products/{product_id}
async fn update_product(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
    Json(payload): Json<UpdateProductInput>,
) -> Result<Json<Product>, ApiError> {
    Ok(Json(state.store.products.update(product_id, payload).await?))
}

/// DELETE /products/{product_id}
async fn delete_product(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Result<StatusCode, ApiError> {
    state.store.products.delete(product_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
