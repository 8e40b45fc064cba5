//! Billing arithmetic shared by quotes and invoices.
//!
//! This module implements:
//! - Line items with totals recomputed on every quantity/price edit
//! - Document totals (subtotal, flat tax, total)
//! - Billing rules loaded from configuration
//! - Document numbering
//! - Validation applied before a quote or invoice is saved

pub mod error;
pub mod line_item;
pub mod numbering;
pub mod service;
pub mod totals;

#[cfg(test)]
mod props;

pub use error::BillingError;
pub use line_item::{LineItem, LineItemEdit, LineItemInput};
pub use numbering::{DocumentKind, DocumentNumber};
pub use service::{BillingRules, BillingService, SaveAction};
pub use totals::{DocumentTotals, PricedLines, TaxPolicy, checked_sum};
