//! Quote to invoice conversion.

use chrono::NaiveDate;

use super::types::Quote;
use crate::billing::{BillingRules, LineItemInput, SaveAction};
use crate::invoice::CreateInvoiceInput;

/// Builds the input for an invoice billing `quote`.
///
/// The invoice is dated `today`, due after the payment terms and saved as a
/// draft. Client, rows and notes are copied; the quote itself is not touched.
#[must_use]
pub fn to_invoice_draft(
    quote: &Quote,
    today: NaiveDate,
    rules: &BillingRules,
    number: String,
) -> CreateInvoiceInput {
    CreateInvoiceInput {
        number: Some(number),
        client_id: quote.client_id,
        client_name: quote.client_name.clone(),
        date: Some(today),
        due_date: Some(rules.due_date(today)),
        action: SaveAction::Save,
        items: quote.lines.items.iter().map(LineItemInput::from).collect(),
        notes: quote.notes.clone(),
    }
}
