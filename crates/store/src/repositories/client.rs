//! Client repository.

use chrono::Utc;
use invoicer_core::client::{Client, ClientFilter, CreateClientInput, UpdateClientInput};
use invoicer_shared::types::ClientId;
use tracing::info;

use crate::collection::{Collection, Record};
use crate::error::StoreError;
use crate::latency::SimulatedLatency;

impl Record for Client {
    type Id = ClientId;
    const KIND: &'static str = "client";

    fn id(&self) -> ClientId {
        self.id
    }
}

/// Client repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    clients: Collection<Client>,
    latency: SimulatedLatency,
}

impl ClientRepository {
    /// Creates a new client repository.
    #[must_use]
    pub const fn new(clients: Collection<Client>, latency: SimulatedLatency) -> Self {
        Self { clients, latency }
    }

    /// Creates a client with zeroed stats and prepends it.
    ///
    /// # Errors
    ///
    /// Returns an error if the name or email is missing or invalid.
    pub async fn create(&self, input: CreateClientInput) -> Result<Client, StoreError> {
        self.latency.wait().await;
        let client = Client::create(input, Utc::now())?;
        info!(client_id = %client.id, name = %client.name, "Client created");
        Ok(self.clients.prepend(client).await)
    }

    /// Merges supplied fields into the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the client does not exist or the result is invalid.
    pub async fn update(
        &self,
        id: ClientId,
        input: UpdateClientInput,
    ) -> Result<Client, StoreError> {
        self.latency.wait().await;
        let client = self
            .clients
            .modify(id, |client| client.apply_update(input, Utc::now()))
            .await?;
        info!(client_id = %id, "Client updated");
        Ok(client)
    }

    /// Removes the client. Quotes and invoices referencing it are kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the client does not exist.
    pub async fn delete(&self, id: ClientId) -> Result<(), StoreError> {
        self.latency.wait().await;
        self.clients.remove(id).await?;
        info!(client_id = %id, "Client deleted");
        Ok(())
    }

    /// Finds a client by ID.
    pub async fn get(&self, id: ClientId) -> Option<Client> {
        self.clients.get(id).await
    }

    /// Lists clients newest first.
    pub async fn list(&self, filter: &ClientFilter) -> Vec<Client> {
        self.clients.filter(|client| filter.matches(client)).await
    }

    /// Number of clients.
    pub async fn count(&self) -> usize {
        self.clients.len().await
    }
}
