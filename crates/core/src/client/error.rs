//! Client error types.

use invoicer_shared::AppError;
use thiserror::Error;

/// Client validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    /// Company name is required.
    #[error("Client name is required")]
    MissingName,

    /// Email is required.
    #[error("Client email is required")]
    MissingEmail,

    /// Email does not look like an address.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        Self::Validation(err.to_string())
    }
}
