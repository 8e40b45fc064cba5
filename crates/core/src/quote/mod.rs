//! Quotes, their form defaults and conversion into invoices.

pub mod convert;
pub mod draft;
pub mod types;

pub use convert::to_invoice_draft;
pub use draft::{DEFAULT_QUOTE_NOTES, QuoteDraft};
pub use types::{CreateQuoteInput, Quote, QuoteFilter, QuoteStatus, UpdateQuoteInput};
