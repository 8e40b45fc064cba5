//! Quote domain types.

use chrono::{DateTime, NaiveDate, Utc};
use invoicer_shared::types::{ClientId, QuoteId};
use serde::{Deserialize, Serialize};

use crate::billing::{
    BillingError, BillingRules, BillingService, DocumentKind, LineItemInput, PricedLines,
    SaveAction,
};
use crate::search::SearchTerm;
use crate::text::non_blank;

/// Lifecycle of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    /// Being prepared.
    #[default]
    Draft,
    /// Sent to the client.
    Sent,
    /// Accepted by the client.
    Accepted,
    /// Rejected by the client.
    Rejected,
    /// Past its validity date.
    Expired,
}

impl QuoteStatus {
    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Expired => "expired",
        }
    }
}

impl From<SaveAction> for QuoteStatus {
    fn from(action: SaveAction) -> Self {
        match action {
            SaveAction::Save => Self::Draft,
            SaveAction::Send => Self::Sent,
        }
    }
}

/// A quote (devis).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote ID.
    pub id: QuoteId,
    /// Display number (`DEV-...`).
    pub number: String,
    /// Referenced client, not checked against the client list.
    pub client_id: Option<ClientId>,
    /// Client name as entered.
    pub client_name: String,
    /// Issue date.
    pub date: NaiveDate,
    /// Last day the offer holds.
    pub valid_until: NaiveDate,
    /// Status.
    pub status: QuoteStatus,
    /// Rows and derived totals.
    #[serde(flatten)]
    pub lines: PricedLines,
    /// Notes printed on the quote.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a quote.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateQuoteInput {
    /// Number; generated when blank.
    pub number: Option<String>,
    /// Client reference.
    pub client_id: Option<ClientId>,
    /// Client name (required).
    pub client_name: String,
    /// Issue date; today when absent.
    pub date: Option<NaiveDate>,
    /// Validity date; date plus the validity period when absent.
    pub valid_until: Option<NaiveDate>,
    /// `send` creates a sent quote, `save` a draft.
    pub action: SaveAction,
    /// Rows.
    pub items: Vec<LineItemInput>,
    /// Notes.
    pub notes: Option<String>,
}

/// Partial update of a quote.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateQuoteInput {
    /// Number.
    pub number: Option<String>,
    /// Client reference.
    pub client_id: Option<ClientId>,
    /// Client name.
    pub client_name: Option<String>,
    /// Issue date.
    pub date: Option<NaiveDate>,
    /// Validity date.
    pub valid_until: Option<NaiveDate>,
    /// Status.
    pub status: Option<QuoteStatus>,
    /// Rows; replaces all rows and reprices the quote.
    pub items: Option<Vec<LineItemInput>>,
    /// Notes; an empty string clears them.
    pub notes: Option<String>,
}

/// Search and status filter for the quote list.
#[derive(Debug, Clone, Default)]
pub struct QuoteFilter {
    /// Matches client name or number.
    pub search: Option<SearchTerm>,
    /// Exact status.
    pub status: Option<QuoteStatus>,
}

impl Quote {
    /// Validates and prices input into a new quote stamped at `now`.
    ///
    /// # Errors
    ///
    /// Returns `BillingError` if the client or rows are missing, a row is
    /// negative or too large, or the validity date precedes the quote date.
    pub fn create(
        input: CreateQuoteInput,
        rules: &BillingRules,
        now: DateTime<Utc>,
    ) -> Result<Self, BillingError> {
        let date = input.date.unwrap_or_else(|| now.date_naive());
        let valid_until = input.valid_until.unwrap_or_else(|| rules.valid_until(date));
        let lines = BillingService::price(input.items, rules)?;
        let client_name = input.client_name.trim().to_string();

        BillingService::validate_document(&client_name, &lines.items)?;
        BillingService::validate_follows("valid_until", date, valid_until)?;

        Ok(Self {
            id: QuoteId::new(),
            number: non_blank(input.number)
                .unwrap_or_else(|| rules.next_number(DocumentKind::Quote, now)),
            client_id: input.client_id,
            client_name,
            date,
            valid_until,
            status: input.action.into(),
            lines,
            notes: non_blank(input.notes),
            created_at: now,
            updated_at: now,
        })
    }

    /// Merges supplied fields, repricing when rows are supplied.
    ///
    /// # Errors
    ///
    /// Returns `BillingError` if the merged quote is invalid; the quote is then
    /// left unchanged.
    pub fn apply_update(
        &mut self,
        update: UpdateQuoteInput,
        rules: &BillingRules,
        now: DateTime<Utc>,
    ) -> Result<(), BillingError> {
        let mut next = self.clone();

        if let Some(number) = non_blank(update.number) {
            next.number = number;
        }
        if update.client_id.is_some() {
            next.client_id = update.client_id;
        }
        if let Some(client_name) = update.client_name {
            next.client_name = client_name.trim().to_string();
        }
        if let Some(date) = update.date {
            next.date = date;
        }
        if let Some(valid_until) = update.valid_until {
            next.valid_until = valid_until;
        }
        if let Some(status) = update.status {
            next.status = status;
        }
        if let Some(items) = update.items {
            next.lines = BillingService::price(items, rules)?;
        }
        if update.notes.is_some() {
            next.notes = non_blank(update.notes);
        }

        BillingService::validate_document(&next.client_name, &next.lines.items)?;
        BillingService::validate_follows("valid_until", next.date, next.valid_until)?;

        next.updated_at = now;
        *self = next;
        Ok(())
    }
}

impl QuoteFilter {
    /// Builds a filter from raw query values.
    #[must_use]
    pub fn new(search: Option<&str>, status: Option<QuoteStatus>) -> Self {
        Self {
            search: SearchTerm::parse(search),
            status,
        }
    }

    /// Returns true if the quote passes the filter.
    #[must_use]
    pub fn matches(&self, quote: &Quote) -> bool {
        self.status.is_none_or(|status| quote.status == status)
            && self.search.as_ref().is_none_or(|term| {
                term.matches_any([quote.client_name.as_str(), quote.number.as_str()])
            })
    }
}
