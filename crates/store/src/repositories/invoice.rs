//! Invoice repository.

use chrono::Utc;
use invoicer_core::billing::BillingRules;
use invoicer_core::invoice::{CreateInvoiceInput, Invoice, InvoiceFilter, UpdateInvoiceInput};
use invoicer_shared::types::{ClientId, InvoiceId};
use tracing::info;

use crate::collection::{Collection, Record};
use crate::error::StoreError;
use crate::latency::SimulatedLatency;

impl Record for Invoice {
    type Id = InvoiceId;
    const KIND: &'static str = "invoice";

    fn id(&self) -> InvoiceId {
        self.id
    }
}

/// Invoice repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    invoices: Collection<Invoice>,
    rules: BillingRules,
    latency: SimulatedLatency,
}

impl InvoiceRepository {
    /// Creates a new invoice repository.
    #[must_use]
    pub const fn new(
        invoices: Collection<Invoice>,
        rules: BillingRules,
        latency: SimulatedLatency,
    ) -> Self {
        Self {
            invoices,
            rules,
            latency,
        }
    }

    /// Prices, validates and prepends a new invoice.
    ///
    /// # Errors
    ///
    /// Returns an error if the invoice is invalid.
    pub async fn create(&self, input: CreateInvoiceInput) -> Result<Invoice, StoreError> {
        self.latency.wait_slow().await;
        let invoice = Invoice::create(input, &self.rules, Utc::now())?;
        info!(
            invoice_id = %invoice.id,
            number = %invoice.number,
            status = invoice.status.as_str(),
            total = %invoice.lines.totals.total,
            "Invoice created"
        );
        Ok(self.invoices.prepend(invoice).await)
    }

    /// Merges supplied fields into the invoice, repricing supplied rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the invoice does not exist or the result is invalid.
    pub async fn update(
        &self,
        id: InvoiceId,
        input: UpdateInvoiceInput,
    ) -> Result<Invoice, StoreError> {
        self.latency.wait().await;
        let rules = &self.rules;
        let invoice = self
            .invoices
            .modify(id, |invoice| invoice.apply_update(input, rules, Utc::now()))
            .await?;
        info!(invoice_id = %id, status = invoice.status.as_str(), "Invoice updated");
        Ok(invoice)
    }

    /// Removes the invoice.
    ///
    /// # Errors
    ///
    /// Returns an error if the invoice does not exist.
    pub async fn delete(&self, id: InvoiceId) -> Result<(), StoreError> {
        self.latency.wait().await;
        self.invoices.remove(id).await?;
        info!(invoice_id = %id, "Invoice deleted");
        Ok(())
    }

    /// Finds an invoice by ID.
    pub async fn get(&self, id: InvoiceId) -> Option<Invoice> {
        self.invoices.get(id).await
    }

    /// Lists invoices newest first.
    pub async fn list(&self, filter: &InvoiceFilter) -> Vec<Invoice> {
        self.invoices.filter(|invoice| filter.matches(invoice)).await
    }

    /// Invoices referencing `client_id`.
    pub async fn for_client(&self, client_id: ClientId) -> Vec<Invoice> {
        self.invoices
            .filter(|invoice| invoice.client_id == Some(client_id))
            .await
    }

    /// Snapshot of every invoice.
    pub async fn all(&self) -> Vec<Invoice> {
        self.invoices.all().await
    }
}
