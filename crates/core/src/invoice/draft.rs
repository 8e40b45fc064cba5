//! Defaults for a new invoice form.

use chrono::{DateTime, NaiveDate, Utc};
use invoicer_shared::types::ClientId;
use serde::Serialize;

use crate::billing::{BillingRules, DocumentKind, PricedLines};
use crate::client::Client;

/// Notes pre-filled on a new invoice.
pub const DEFAULT_INVOICE_NOTES: &str = "Paiement à 30 jours. Merci de votre confiance.";

/// A pre-filled, unsaved invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceDraft {
    /// Proposed number.
    pub number: String,
    /// Preselected client.
    pub client_id: Option<ClientId>,
    /// Preselected client name, empty when none.
    pub client_name: String,
    /// Issue date.
    pub date: NaiveDate,
    /// Due date.
    pub due_date: NaiveDate,
    /// One blank row.
    #[serde(flatten)]
    pub lines: PricedLines,
    /// Default notes.
    pub notes: String,
}

impl InvoiceDraft {
    /// Builds the defaults for an invoice started at `now`.
    #[must_use]
    pub fn new(rules: &BillingRules, now: DateTime<Utc>) -> Self {
        let date = now.date_naive();
        Self {
            number: rules.next_number(DocumentKind::Invoice, now),
            client_id: None,
            client_name: String::new(),
            date,
            due_date: rules.due_date(date),
            lines: PricedLines::blank(),
            notes: DEFAULT_INVOICE_NOTES.to_string(),
        }
    }

    /// Preselects a client.
    #[must_use]
    pub fn with_client(mut self, client: &Client) -> Self {
        self.client_id = Some(client.id);
        self.client_name.clone_from(&client.name);
        self
    }
}
