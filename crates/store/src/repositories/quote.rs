//! Quote repository.

use chrono::Utc;
use invoicer_core::billing::{BillingRules, DocumentKind, DocumentNumber};
use invoicer_core::invoice::CreateInvoiceInput;
use invoicer_core::quote::{
    CreateQuoteInput, Quote, QuoteFilter, UpdateQuoteInput, to_invoice_draft,
};
use invoicer_shared::types::QuoteId;
use tracing::{debug, info};

use crate::collection::{Collection, Record};
use crate::error::StoreError;
use crate::latency::SimulatedLatency;

impl Record for Quote {
    type Id = QuoteId;
    const KIND: &'static str = "quote";

    fn id(&self) -> QuoteId {
        self.id
    }
}

/// Quote repository for CRUD operations and conversion.
#[derive(Debug, Clone)]
pub struct QuoteRepository {
    quotes: Collection<Quote>,
    rules: BillingRules,
    latency: SimulatedLatency,
}

impl QuoteRepository {
    /// Creates a new quote repository.
    #[must_use]
    pub const fn new(
        quotes: Collection<Quote>,
        rules: BillingRules,
        latency: SimulatedLatency,
    ) -> Self {
        Self {
            quotes,
            rules,
            latency,
        }
    }

    /// Prices, validates and prepends a new quote.
    ///
    /// # Errors
    ///
    /// Returns an error if the quote is invalid.
    pub async fn create(&self, input: CreateQuoteInput) -> Result<Quote, StoreError> {
        self.latency.wait_slow().await;
        let quote = Quote::create(input, &self.rules, Utc::now())?;
        info!(
            quote_id = %quote.id,
            number = %quote.number,
            total = %quote.lines.totals.total,
            "Quote created"
        );
        Ok(self.quotes.prepend(quote).await)
    }

    /// Merges supplied fields into the quote, repricing supplied rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the quote does not exist or the result is invalid.
    pub async fn update(&self, id: QuoteId, input: UpdateQuoteInput) -> Result<Quote, StoreError> {
        self.latency.wait().await;
        let rules = &self.rules;
        let quote = self
            .quotes
            .modify(id, |quote| quote.apply_update(input, rules, Utc::now()))
            .await?;
        info!(quote_id = %id, status = quote.status.as_str(), "Quote updated");
        Ok(quote)
    }

    /// Removes the quote.
    ///
    /// # Errors
    ///
    /// Returns an error if the quote does not exist.
    pub async fn delete(&self, id: QuoteId) -> Result<(), StoreError> {
        self.latency.wait().await;
        self.quotes.remove(id).await?;
        info!(quote_id = %id, "Quote deleted");
        Ok(())
    }

    /// Finds a quote by ID.
    pub async fn get(&self, id: QuoteId) -> Option<Quote> {
        self.quotes.get(id).await
    }

    /// Lists quotes newest first.
    pub async fn list(&self, filter: &QuoteFilter) -> Vec<Quote> {
        self.quotes.filter(|quote| filter.matches(quote)).await
    }

    /// Snapshot of every quote.
    pub async fn all(&self) -> Vec<Quote> {
        self.quotes.all().await
    }

    /// Builds the invoice input for a quote, or `None` if the quote does not
    /// exist.
    ///
    /// Nothing is stored and the quote is left as is; the caller creates the
    /// invoice.
    pub async fn convert_to_invoice(&self, id: QuoteId) -> Option<CreateInvoiceInput> {
        let quote = self.quotes.get(id).await?;
        self.latency.wait_slow().await;

        let now = Utc::now();
        let number = DocumentNumber::timestamped(self.rules.prefix(DocumentKind::Invoice), now);
        debug!(quote_id = %id, invoice_number = %number, "Quote converted");
        Some(to_invoice_draft(&quote, now.date_naive(), &self.rules, number))
    }
}
