//! Billing rules and document validation.

use chrono::{DateTime, Days, NaiveDate, Utc};
use invoicer_shared::BillingConfig;
use invoicer_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::BillingError;
use super::line_item::{LineItem, LineItemInput};
use super::numbering::{DocumentKind, DocumentNumber};
use super::totals::{PricedLines, TaxPolicy};

/// Billing rules in effect for the running service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingRules {
    /// Flat tax applied to every document.
    pub tax: TaxPolicy,
    /// Currency of all amounts.
    pub currency: Currency,
    /// Days from invoice date to due date.
    pub payment_terms_days: u32,
    /// Days a quote stays valid.
    pub quote_validity_days: u32,
    /// Prefix of invoice numbers.
    pub invoice_prefix: String,
    /// Prefix of quote numbers.
    pub quote_prefix: String,
}

impl BillingRules {
    /// Builds rules from configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTaxRate` if the configured rate is outside 0..=1, or
    /// `EmptyNumberPrefix` if a number prefix is blank.
    pub fn from_config(config: &BillingConfig) -> Result<Self, BillingError> {
        Ok(Self {
            tax: TaxPolicy::flat(config.tax_rate)?,
            currency: config.currency,
            payment_terms_days: config.payment_terms_days,
            quote_validity_days: config.quote_validity_days,
            invoice_prefix: number_prefix(&config.invoice_prefix)?,
            quote_prefix: number_prefix(&config.quote_prefix)?,
        })
    }

    /// Number prefix for documents of `kind`.
    #[must_use]
    pub fn prefix(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::Invoice => &self.invoice_prefix,
            DocumentKind::Quote => &self.quote_prefix,
        }
    }

    /// Number for a new document of `kind` created at `now`.
    #[must_use]
    pub fn next_number(&self, kind: DocumentKind, now: DateTime<Utc>) -> String {
        DocumentNumber::generate(self.prefix(kind), now)
    }

    /// Due date of an invoice issued on `date`.
    #[must_use]
    pub fn due_date(&self, date: NaiveDate) -> NaiveDate {
        add_days(date, self.payment_terms_days)
    }

    /// Expiry date of a quote issued on `date`.
    #[must_use]
    pub fn valid_until(&self, date: NaiveDate) -> NaiveDate {
        add_days(date, self.quote_validity_days)
    }
}

impl Default for BillingRules {
    fn default() -> Self {
        let config = BillingConfig::default();
        Self {
            tax: TaxPolicy::default(),
            currency: config.currency,
            payment_terms_days: config.payment_terms_days,
            quote_validity_days: config.quote_validity_days,
            invoice_prefix: config.invoice_prefix,
            quote_prefix: config.quote_prefix,
        }
    }
}

fn number_prefix(raw: &str) -> Result<String, BillingError> {
    let prefix = raw.trim();
    if prefix.is_empty() {
        return Err(BillingError::EmptyNumberPrefix);
    }
    Ok(prefix.to_string())
}

fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX)
}

/// What the user asked for when saving a new document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveAction {
    /// Keep the document as a draft.
    #[default]
    Save,
    /// Mark the document as sent to the client.
    Send,
}

/// Billing service: validation and pricing shared by quotes and invoices.
///
/// Pure business logic with no storage dependencies.
pub struct BillingService;

impl BillingService {
    /// Validates a document before it is saved.
    ///
    /// # Errors
    ///
    /// - `MissingClient` if the client name is blank
    /// - `NoLineItems` if there are no rows or every description is blank
    /// - `NegativeQuantity` / `NegativeUnitPrice` for negative row values
    pub fn validate_document(client_name: &str, items: &[LineItem]) -> Result<(), BillingError> {
        if client_name.trim().is_empty() {
            return Err(BillingError::MissingClient);
        }

        Self::validate_items(items)
    }

    /// Validates the rows of a document.
    ///
    /// # Errors
    ///
    /// See [`BillingService::validate_document`].
    pub fn validate_items(items: &[LineItem]) -> Result<(), BillingError> {
        if items.iter().all(LineItem::is_blank) {
            return Err(BillingError::NoLineItems);
        }

        for item in items {
            if item.quantity < Decimal::ZERO {
                return Err(BillingError::NegativeQuantity(item.description.clone()));
            }
            if item.unit_price < Decimal::ZERO {
                return Err(BillingError::NegativeUnitPrice(item.description.clone()));
            }
        }

        Ok(())
    }

    /// Checks that `value` is not before the document `date`.
    ///
    /// # Errors
    ///
    /// Returns `DateBeforeDocument` naming `field`.
    pub fn validate_follows(
        field: &'static str,
        date: NaiveDate,
        value: NaiveDate,
    ) -> Result<(), BillingError> {
        if value < date {
            return Err(BillingError::DateBeforeDocument { field, value, date });
        }
        Ok(())
    }

    /// Prices submitted rows under the given rules.
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` if a line or document total does not fit.
    pub fn price(
        inputs: Vec<LineItemInput>,
        rules: &BillingRules,
    ) -> Result<PricedLines, BillingError> {
        PricedLines::from_inputs(inputs, &rules.tax)
    }
}
