//! Defaults for a new quote form.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::billing::{BillingRules, DocumentKind, PricedLines};

/// Notes pre-filled on a new quote.
pub const DEFAULT_QUOTE_NOTES: &str = "Ce devis est valable 30 jours. Merci de votre confiance.";

/// A pre-filled, unsaved quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteDraft {
    /// Proposed number.
    pub number: String,
    /// Issue date.
    pub date: NaiveDate,
    /// Validity date.
    pub valid_until: NaiveDate,
    /// One blank row.
    #[serde(flatten)]
    pub lines: PricedLines,
    /// Default notes.
    pub notes: String,
}

impl QuoteDraft {
    /// Builds the defaults for a quote started at `now`.
    #[must_use]
    pub fn new(rules: &BillingRules, now: DateTime<Utc>) -> Self {
        let date = now.date_naive();
        Self {
            number: rules.next_number(DocumentKind::Quote, now),
            date,
            valid_until: rules.valid_until(date),
            lines: PricedLines::blank(),
            notes: DEFAULT_QUOTE_NOTES.to_string(),
        }
    }
}
