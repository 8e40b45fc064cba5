//! In-memory storage layer for Invoicer.
//!
//! This crate provides:
//! - A generic `RwLock`-guarded collection
//! - Client, product, quote and invoice repositories
//! - Simulated latency before mutations
//! - Demo seed data

pub mod collection;
pub mod error;
pub mod latency;
pub mod repositories;
pub mod seed;

pub use collection::{Collection, Record};
pub use error::StoreError;
pub use latency::SimulatedLatency;
pub use repositories::{ClientRepository, InvoiceRepository, ProductRepository, QuoteRepository};
pub use seed::SeedData;

use chrono::{NaiveDate, Utc};
use invoicer_core::billing::BillingRules;
use invoicer_core::client::ClientStats;
use invoicer_core::dashboard::{DashboardMetrics, DashboardService};
use invoicer_core::invoice::InvoiceDraft;
use invoicer_shared::StoreConfig;
use invoicer_shared::types::ClientId;
use tracing::info;

/// The four collections and their repositories.
#[derive(Debug, Clone)]
pub struct Store {
    /// Clients.
    pub clients: ClientRepository,
    /// Products and services.
    pub products: ProductRepository,
    /// Quotes.
    pub quotes: QuoteRepository,
    /// Invoices.
    pub invoices: InvoiceRepository,
    rules: BillingRules,
}

impl Store {
    /// Builds a store over the given records.
    #[must_use]
    pub fn with_data(data: SeedData, rules: BillingRules, latency: SimulatedLatency) -> Self {
        Self {
            clients: ClientRepository::new(Collection::with_records(data.clients), latency),
            products: ProductRepository::new(Collection::with_records(data.products), latency),
            quotes: QuoteRepository::new(
                Collection::with_records(data.quotes),
                rules.clone(),
                latency,
            ),
            invoices: InvoiceRepository::new(
                Collection::with_records(data.invoices),
                rules.clone(),
                latency,
            ),
            rules,
        }
    }

    /// Builds an empty store without latency.
    #[must_use]
    pub fn empty(rules: BillingRules) -> Self {
        Self::with_data(SeedData::default(), rules, SimulatedLatency::none())
    }

    /// Builds a store from configuration, loading demo data when enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if the demo data is invalid under `rules`.
    pub fn from_config(config: &StoreConfig, rules: BillingRules) -> Result<Self, StoreError> {
        let data = if config.seed_demo_data {
            SeedData::demo(&rules)?
        } else {
            SeedData::default()
        };
        info!(
            clients = data.clients.len(),
            products = data.products.len(),
            quotes = data.quotes.len(),
            invoices = data.invoices.len(),
            latency_ms = config.simulated_latency_ms,
            "Store initialized"
        );
        Ok(Self::with_data(
            data,
            rules,
            SimulatedLatency::from_millis(config.simulated_latency_ms),
        ))
    }

    /// Billing rules the store prices documents with.
    #[must_use]
    pub const fn rules(&self) -> &BillingRules {
        &self.rules
    }

    /// Live invoice figures for a client.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the client does not exist, or a billing error if
    /// the sums overflow.
    pub async fn client_stats(&self, id: ClientId) -> Result<ClientStats, StoreError> {
        if self.clients.get(id).await.is_none() {
            return Err(StoreError::not_found("client", id));
        }
        let invoices = self.invoices.for_client(id).await;
        Ok(ClientStats::from_invoices(id, &invoices)?)
    }

    /// Dashboard metrics as of `today`.
    ///
    /// # Errors
    ///
    /// Returns a billing error if a revenue sum overflows.
    pub async fn dashboard(&self, today: NaiveDate) -> Result<DashboardMetrics, StoreError> {
        Ok(DashboardService::compute(
            self.clients.count().await,
            self.products.count().await,
            &self.quotes.all().await,
            &self.invoices.all().await,
            self.rules.currency,
            today,
        )?)
    }

    /// Defaults for a new invoice, preselecting `client` when it exists.
    pub async fn invoice_draft(&self, client: Option<ClientId>) -> InvoiceDraft {
        let draft = InvoiceDraft::new(&self.rules, Utc::now());
        let selected = match client {
            Some(id) => self.clients.get(id).await,
            None => None,
        };
        match selected {
            Some(client) => draft.with_client(&client),
            None => draft,
        }
    }
}
