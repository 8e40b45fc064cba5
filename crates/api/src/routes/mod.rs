//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod billing;
pub mod clients;
pub mod dashboard;
pub mod health;
pub mod invoices;
pub mod products;
pub mod quotes;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(dashboard::routes())
        .merge(clients::routes())
        .merge(products::routes())
        .merge(quotes::routes())
        .merge(invoices::routes())
        .merge(billing::routes())
}
