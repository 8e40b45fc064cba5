//! Client domain types.

use chrono::{DateTime, NaiveDate, Utc};
use invoicer_shared::types::ClientId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ClientError;
use crate::search::SearchTerm;
use crate::text::non_blank;

/// A customer of the business.
///
/// `total_invoices`, `total_amount` and `last_invoice` are stored as given and
/// are not kept in sync with invoice data; see [`super::ClientStats`] for
/// figures computed from the invoices themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Client ID.
    pub id: ClientId,
    /// Company name.
    pub name: String,
    /// Name of the contact person.
    pub contact_name: Option<String>,
    /// Contact email.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Postal address, possibly multi-line.
    pub address: Option<String>,
    /// French company registration number.
    pub siret: Option<String>,
    /// Intra-community VAT number.
    pub vat_number: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Stored invoice count.
    pub total_invoices: u32,
    /// Stored invoiced amount.
    pub total_amount: Decimal,
    /// Stored date of the last invoice.
    pub last_invoice: Option<NaiveDate>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateClientInput {
    /// Company name (required).
    pub name: String,
    /// Contact person.
    pub contact_name: Option<String>,
    /// Email (required).
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// SIRET number.
    pub siret: Option<String>,
    /// VAT number.
    pub vat_number: Option<String>,
    /// Notes.
    pub notes: Option<String>,
}

/// Partial update of a client. Absent fields are left unchanged; an empty
/// string clears an optional field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateClientInput {
    /// Company name.
    pub name: Option<String>,
    /// Contact person.
    pub contact_name: Option<String>,
    /// Email.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// SIRET number.
    pub siret: Option<String>,
    /// VAT number.
    pub vat_number: Option<String>,
    /// Notes.
    pub notes: Option<String>,
    /// Stored invoice count.
    pub total_invoices: Option<u32>,
    /// Stored invoiced amount.
    pub total_amount: Option<Decimal>,
    /// Stored last invoice date.
    pub last_invoice: Option<NaiveDate>,
}

/// Search filter for the client list.
#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    /// Matches name, email or contact name.
    pub search: Option<SearchTerm>,
}

impl Client {
    /// Validates input and builds a new client stamped at `now`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the name or email is missing or invalid.
    pub fn create(input: CreateClientInput, now: DateTime<Utc>) -> Result<Self, ClientError> {
        let name = input.name.trim().to_string();
        let email = input.email.trim().to_string();
        validate(&name, &email)?;

        Ok(Self {
            id: ClientId::new(),
            name,
            contact_name: non_blank(input.contact_name),
            email,
            phone: non_blank(input.phone),
            address: non_blank(input.address),
            siret: non_blank(input.siret),
            vat_number: non_blank(input.vat_number),
            notes: non_blank(input.notes),
            total_invoices: 0,
            total_amount: Decimal::ZERO,
            last_invoice: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merges supplied fields and restamps `updated_at`.
    ///
    /// The client is left untouched if the result would be invalid.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` if the merged name or email is invalid.
    pub fn apply_update(
        &mut self,
        update: UpdateClientInput,
        now: DateTime<Utc>,
    ) -> Result<(), ClientError> {
        let mut next = self.clone();

        if let Some(name) = update.name {
            next.name = name.trim().to_string();
        }
        if let Some(email) = update.email {
            next.email = email.trim().to_string();
        }
        merge_optional(&mut next.contact_name, update.contact_name);
        merge_optional(&mut next.phone, update.phone);
        merge_optional(&mut next.address, update.address);
        merge_optional(&mut next.siret, update.siret);
        merge_optional(&mut next.vat_number, update.vat_number);
        merge_optional(&mut next.notes, update.notes);
        if let Some(count) = update.total_invoices {
            next.total_invoices = count;
        }
        if let Some(amount) = update.total_amount {
            next.total_amount = amount;
        }
        if let Some(date) = update.last_invoice {
            next.last_invoice = Some(date);
        }

        validate(&next.name, &next.email)?;
        next.updated_at = now;
        *self = next;
        Ok(())
    }
}

fn merge_optional(field: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *field = non_blank(value);
    }
}

fn validate(name: &str, email: &str) -> Result<(), ClientError> {
    if name.is_empty() {
        return Err(ClientError::MissingName);
    }
    if email.is_empty() {
        return Err(ClientError::MissingEmail);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ClientError::InvalidEmail(email.to_string())),
    }
}

impl ClientFilter {
    /// Builds a filter from a raw search string.
    #[must_use]
    pub fn search(raw: Option<&str>) -> Self {
        Self {
            search: SearchTerm::parse(raw),
        }
    }

    /// Returns true if the client passes the filter.
    #[must_use]
    pub fn matches(&self, client: &Client) -> bool {
        self.search.as_ref().is_none_or(|term| {
            term.matches_any([
                client.name.as_str(),
                client.email.as_str(),
                client.contact_name.as_deref().unwrap_or_default(),
            ])
        })
    }
}
