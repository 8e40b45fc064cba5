//! Invoice domain types.

use chrono::{DateTime, NaiveDate, Utc};
use invoicer_shared::types::{ClientId, InvoiceId};
use serde::{Deserialize, Serialize};

use crate::billing::{
    BillingError, BillingRules, BillingService, DocumentKind, LineItemInput, PricedLines,
    SaveAction,
};
use crate::search::SearchTerm;
use crate::text::non_blank;

/// Payment lifecycle of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Being prepared.
    #[default]
    Draft,
    /// Sent to the client.
    Sent,
    /// Awaiting payment.
    Pending,
    /// Paid.
    Paid,
    /// Past its due date.
    Overdue,
}

impl InvoiceStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [Self; 5] = [
        Self::Draft,
        Self::Sent,
        Self::Pending,
        Self::Paid,
        Self::Overdue,
    ];

    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Overdue => "overdue",
        }
    }

    /// True if money is still expected for the invoice.
    #[must_use]
    pub const fn is_outstanding(self) -> bool {
        matches!(self, Self::Sent | Self::Pending | Self::Overdue)
    }
}

impl From<SaveAction> for InvoiceStatus {
    fn from(action: SaveAction) -> Self {
        match action {
            SaveAction::Save => Self::Draft,
            SaveAction::Send => Self::Pending,
        }
    }
}

/// An invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice ID.
    pub id: InvoiceId,
    /// Display number (`INV-...`).
    pub number: String,
    /// Referenced client, not checked against the client list.
    pub client_id: Option<ClientId>,
    /// Client name as entered.
    pub client_name: String,
    /// Issue date.
    pub date: NaiveDate,
    /// Payment due date.
    pub due_date: NaiveDate,
    /// Payment status.
    pub status: InvoiceStatus,
    /// Rows and derived totals.
    #[serde(flatten)]
    pub lines: PricedLines,
    /// Notes printed on the invoice.
    pub notes: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating an invoice.
///
/// Missing number and dates are filled from the billing rules. Line totals
/// and document totals are always recomputed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateInvoiceInput {
    /// Number; generated when blank.
    pub number: Option<String>,
    /// Client reference.
    pub client_id: Option<ClientId>,
    /// Client name (required).
    pub client_name: String,
    /// Issue date; today when absent.
    pub date: Option<NaiveDate>,
    /// Due date; date plus payment terms when absent.
    pub due_date: Option<NaiveDate>,
    /// `send` creates a pending invoice, `save` a draft.
    pub action: SaveAction,
    /// Rows.
    pub items: Vec<LineItemInput>,
    /// Notes.
    pub notes: Option<String>,
}

/// Partial update of an invoice.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateInvoiceInput {
    /// Number.
    pub number: Option<String>,
    /// Client reference.
    pub client_id: Option<ClientId>,
    /// Client name.
    pub client_name: Option<String>,
    /// Issue date.
    pub date: Option<NaiveDate>,
    /// Due date.
    pub due_date: Option<NaiveDate>,
    /// Status.
    pub status: Option<InvoiceStatus>,
    /// Rows; replaces all rows and reprices the invoice.
    pub items: Option<Vec<LineItemInput>>,
    /// Notes; an empty string clears them.
    pub notes: Option<String>,
}

/// Search and status filter for the invoice list.
#[derive(Debug, Clone, Default)]
pub struct InvoiceFilter {
    /// Matches client name or number.
    pub search: Option<SearchTerm>,
    /// Exact status.
    pub status: Option<InvoiceStatus>,
}

impl Invoice {
    /// Validates and prices input into a new invoice stamped at `now`.
    ///
    /// # Errors
    ///
    /// Returns `BillingError` if the client or rows are missing, a row is
    /// negative or too large, or the due date precedes the invoice date.
    pub fn create(
        input: CreateInvoiceInput,
        rules: &BillingRules,
        now: DateTime<Utc>,
    ) -> Result<Self, BillingError> {
        let date = input.date.unwrap_or_else(|| now.date_naive());
        let due_date = input.due_date.unwrap_or_else(|| rules.due_date(date));
        let lines = BillingService::price(input.items, rules)?;
        let client_name = input.client_name.trim().to_string();

        BillingService::validate_document(&client_name, &lines.items)?;
        BillingService::validate_follows("due_date", date, due_date)?;

        Ok(Self {
            id: InvoiceId::new(),
            number: non_blank(input.number)
                .unwrap_or_else(|| rules.next_number(DocumentKind::Invoice, now)),
            client_id: input.client_id,
            client_name,
            date,
            due_date,
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
    /// Returns `BillingError` if the merged invoice is invalid; the invoice is
    /// then left unchanged.
    pub fn apply_update(
        &mut self,
        update: UpdateInvoiceInput,
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
        if let Some(due_date) = update.due_date {
            next.due_date = due_date;
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
        BillingService::validate_follows("due_date", next.date, next.due_date)?;

        next.updated_at = now;
        *self = next;
        Ok(())
    }
}

impl InvoiceFilter {
    /// Builds a filter from raw query values.
    #[must_use]
    pub fn new(search: Option<&str>, status: Option<InvoiceStatus>) -> Self {
        Self {
            search: SearchTerm::parse(search),
            status,
        }
    }

    /// Returns true if the invoice passes the filter.
    #[must_use]
    pub fn matches(&self, invoice: &Invoice) -> bool {
        self.status.is_none_or(|status| invoice.status == status)
            && self.search.as_ref().is_none_or(|term| {
                term.matches_any([invoice.client_name.as_str(), invoice.number.as_str()])
            })
    }
}
