//! Billing error types.

use invoicer_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while validating a quote or invoice.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingError {
    /// No client was selected.
    #[error("A client must be selected")]
    MissingClient,

    /// The document has no line item with a description.
    #[error("At least one line item is required")]
    NoLineItems,

    /// A line item has a negative quantity.
    #[error("Quantity cannot be negative (line '{0}')")]
    NegativeQuantity(String),

    /// A line item has a negative unit price.
    #[error("Unit price cannot be negative (line '{0}')")]
    NegativeUnitPrice(String),

    /// An amount does not fit in a `Decimal`.
    #[error("Amount is too large")]
    AmountOverflow,

    /// A configured document number prefix is blank.
    #[error("Document number prefix cannot be empty")]
    EmptyNumberPrefix,

    /// The configured tax rate is outside 0..=1.
    #[error("Tax rate must be between 0 and 1, got {0}")]
    InvalidTaxRate(Decimal),

    /// A date that must follow the document date precedes it.
    #[error("{field} ({value}) cannot be before the document date ({date})")]
    DateBeforeDocument {
        /// Name of the offending field.
        field: &'static str,
        /// The offending date.
        value: chrono::NaiveDate,
        /// The document date.
        date: chrono::NaiveDate,
    },
}

impl BillingError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingClient => "MISSING_CLIENT",
            Self::NoLineItems => "NO_LINE_ITEMS",
            Self::NegativeQuantity(_) => "NEGATIVE_QUANTITY",
            Self::NegativeUnitPrice(_) => "NEGATIVE_UNIT_PRICE",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
            Self::EmptyNumberPrefix => "EMPTY_NUMBER_PREFIX",
            Self::InvalidTaxRate(_) => "INVALID_TAX_RATE",
            Self::DateBeforeDocument { .. } => "DATE_BEFORE_DOCUMENT",
        }
    }
}

impl From<BillingError> for AppError {
    fn from(err: BillingError) -> Self {
        Self::Validation(err.to_string())
    }
}
