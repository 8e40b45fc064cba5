//! Product error types.

use invoicer_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Product validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    /// Product name is required.
    #[error("Product name is required")]
    MissingName,

    /// Price cannot be negative.
    #[error("Price cannot be negative: {0}")]
    NegativePrice(Decimal),

    /// Tax rate must be a percentage between 0 and 100.
    #[error("Tax rate must be between 0 and 100, got {0}")]
    InvalidTaxRate(Decimal),
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        Self::Validation(err.to_string())
    }
}
