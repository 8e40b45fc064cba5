//! Client statistics computed from invoice data.

use chrono::NaiveDate;
use invoicer_shared::types::ClientId;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::billing::BillingError;
use crate::invoice::Invoice;

/// Invoice figures for one client, computed from the invoices themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientStats {
    /// The client.
    pub client_id: ClientId,
    /// Number of invoices referencing the client.
    pub total_invoices: u32,
    /// Sum of their totals (tax included).
    pub total_amount: Decimal,
    /// Amount still to be collected (sent, pending or overdue).
    pub outstanding_amount: Decimal,
    /// Date of the most recent invoice.
    pub last_invoice: Option<NaiveDate>,
}

impl ClientStats {
    /// Aggregates the invoices whose `client_id` is `client_id`.
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` if an amount does not fit in a `Decimal`.
    pub fn from_invoices<'a>(
        client_id: ClientId,
        invoices: impl IntoIterator<Item = &'a Invoice>,
    ) -> Result<Self, BillingError> {
        let mut stats = Self {
            client_id,
            total_invoices: 0,
            total_amount: Decimal::ZERO,
            outstanding_amount: Decimal::ZERO,
            last_invoice: None,
        };

        for invoice in invoices
            .into_iter()
            .filter(|invoice| invoice.client_id == Some(client_id))
        {
            let total = invoice.lines.totals.total;
            stats.total_invoices = stats.total_invoices.saturating_add(1);
            stats.total_amount = stats
                .total_amount
                .checked_add(total)
                .ok_or(BillingError::AmountOverflow)?;
            if invoice.status.is_outstanding() {
                stats.outstanding_amount = stats
                    .outstanding_amount
                    .checked_add(total)
                    .ok_or(BillingError::AmountOverflow)?;
            }
            stats.last_invoice = stats.last_invoice.max(Some(invoice.date));
        }

        Ok(stats)
    }
}
