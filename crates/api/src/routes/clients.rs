//! Client routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use invoicer_core::client::{
    Client, ClientFilter, ClientStats, CreateClientInput, UpdateClientInput,
};
use invoicer_shared::types::{ClientId, PageRequest, PageResponse};
use serde::Deserialize;
use tracing::info;

use crate::{AppState, error::ApiError};

/// Creates the client routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/clients", get(list_clients).post(create_client))
        .route(
            "/clients/{client_id}",
            get(get_client).put(update_client).delete(delete_client),
        )
        .route("/clients/{client_id}/stats", get(get_client_stats))
}

/// Query parameters for listing clients.
#[derive(Debug, Deserialize)]
pub struct ListClientsQuery {
    /// Matches name, contact or email.
    pub search: Option<String>,
    /// Page number (1-indexed).
    pub page: Option<u32>,
    /// Items per page.
    pub per_page: Option<u32>,
}

/// GET /clients
async fn list_clients(
    State(state): State<AppState>,
    Query(query): Query<ListClientsQuery>,
) -> Json<PageResponse<Client>> {
    let filter = ClientFilter::search(query.search.as_deref());
    let clients = state.store.clients.list(&filter).await;
    Json(PageRequest::new(query.page, query.per_page).paginate(clients))
}

/// POST /clients
async fn create_client(
    State(state): State<AppState>,
    Json(payload): Json<CreateClientInput>,
) -> Result<impl IntoResponse, ApiError> {
    let client = state.store.clients.create(payload).await?;
    info!(client_id = %client.id, "Client created via API");
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /clients/{client_id}
async fn get_client(
    State(state): State<AppState>,
    Path(client_id): Path<ClientId>,
) -> Result<Json<Client>, ApiError> {
    state
        .store
        .clients
        .get(client_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("client", client_id))
}

/// PUT /clients/{client_id}
async fn update_client(
    State(state): State<AppState>,
    Path(client_id): Path<ClientId>,
    Json(payload): Json<UpdateClientInput>,
) -> Result<Json<Client>, ApiError> {
    Ok(Json(state.store.clients.update(client_id, payload).await?))
}

/// DELETE /clients/{client_id}
async fn delete_client(
    State(state): State<AppState>,
    Path(client_id): Path<ClientId>,
) -> Result<StatusCode, ApiError> {
    state.store.clients.delete(client_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /clients/{client_id}/stats
async fn get_client_stats(
    State(state): State<AppState>,
    Path(client_id): Path<ClientId>,
) -> Result<Json<ClientStats>, ApiError> {
    Ok(Json(state.store.client_stats(client_id).await?))
}
