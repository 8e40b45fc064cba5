//! Store error types.

use invoicer_core::billing::BillingError;
use invoicer_core::client::ClientError;
use invoicer_core::product::ProductError;
use invoicer_shared::AppError;
use thiserror::Error;

/// Errors returned by the repositories.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record with this id in the collection.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Record kind ("client", "invoice", ...).
        kind: &'static str,
        /// The id that was looked up.
        id: String,
    },

    /// Client validation failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Product validation failed.
    #[error(transparent)]
    Product(#[from] ProductError),

    /// Quote or invoice validation failed.
    #[error(transparent)]
    Billing(#[from] BillingError),
}

impl StoreError {
    /// Builds a `NotFound` error.
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => Self::NotFound(err.to_string()),
            StoreError::Client(e) => e.into(),
            StoreError::Product(e) => e.into(),
            StoreError::Billing(e) => e.into(),
        }
    }
}
