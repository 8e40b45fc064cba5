//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for clients, products, quotes and invoices
//! - Dashboard and billing preview endpoints
//! - JSON error responses

pub mod error;
pub mod routes;

use axum::Router;
use invoicer_store::Store;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// In-memory collections and billing rules.
    pub store: Arc<Store>,
}

impl AppState {
    /// Wraps a store for sharing across handlers.
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use invoicer_core::billing::BillingRules;
    use invoicer_shared::StoreConfig;
    use invoicer_store::Store;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{AppState, create_router};

    /// Router over the demo data, without latency.
    pub fn app() -> Router {
        let store = Store::from_config(&StoreConfig::default(), BillingRules::default())
            .expect("demo data is valid");
        create_router(AppState::new(store))
    }

    /// Sends one request and decodes the JSON body (`Null` when empty).
    pub async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json");
        let request = match body {
            Some(json) => request.body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}
