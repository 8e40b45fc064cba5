//! Invoices, their payment statuses and form defaults.

pub mod draft;
pub mod types;

pub use draft::{DEFAULT_INVOICE_NOTES, InvoiceDraft};
pub use types::{CreateInvoiceInput, Invoice, InvoiceFilter, InvoiceStatus, UpdateInvoiceInput};
