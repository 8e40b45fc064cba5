//! Dashboard metric computation.

use chrono::{Datelike, Months, NaiveDate};
use invoicer_shared::types::{Currency, Money};
use rust_decimal::Decimal;

use super::types::{DashboardMetrics, RecentDocument, StatusCount};
use crate::billing::{BillingError, checked_sum};
use crate::invoice::{Invoice, InvoiceStatus};
use crate::quote::Quote;

/// Number of documents listed in each recent-activity panel.
pub const RECENT_LIMIT: usize = 3;

/// Dashboard service: pure aggregation over the collections.
pub struct DashboardService;

impl DashboardService {
    /// Computes the dashboard for `today`.
    ///
    /// # Errors
    ///
    /// Returns `AmountOverflow` if a revenue sum does not fit in a `Decimal`.
    pub fn compute(
        client_count: usize,
        product_count: usize,
        quotes: &[Quote],
        invoices: &[Invoice],
        currency: Currency,
        today: NaiveDate,
    ) -> Result<DashboardMetrics, BillingError> {
        let month = first_of_month(today);
        let previous = month.checked_sub_months(Months::new(1)).unwrap_or(month);

        let this_month: Vec<&Invoice> = invoices
            .iter()
            .filter(|i| first_of_month(i.date) == month)
            .collect();
        let last_month: Vec<&Invoice> = invoices
            .iter()
            .filter(|i| first_of_month(i.date) == previous)
            .collect();

        Ok(DashboardMetrics {
            month,
            invoices_this_month: count(this_month.len()),
            invoices_last_month: count(last_month.len()),
            revenue_this_month: Money::new(paid_revenue(&this_month)?, currency),
            revenue_last_month: Money::new(paid_revenue(&last_month)?, currency),
            client_count: count(client_count),
            product_count: count(product_count),
            recent_invoices: Self::recent_invoices(invoices, currency),
            recent_quotes: Self::recent_quotes(quotes, currency),
            invoices_by_status: InvoiceStatus::ALL
                .into_iter()
                .map(|status| StatusCount {
                    status,
                    count: count(invoices.iter().filter(|i| i.status == status).count()),
                })
                .collect(),
        })
    }

    fn recent_invoices(invoices: &[Invoice], currency: Currency) -> Vec<RecentDocument> {
        let mut recent: Vec<&Invoice> = invoices.iter().collect();
        recent.sort_by(|a, b| (b.date, b.created_at).cmp(&(a.date, a.created_at)));
        recent
            .into_iter()
            .take(RECENT_LIMIT)
            .map(|invoice| RecentDocument {
                number: invoice.number.clone(),
                client_name: invoice.client_name.clone(),
                amount: Money::new(invoice.lines.totals.total, currency),
                status: invoice.status.as_str().to_string(),
                date: invoice.date,
            })
            .collect()
    }

    fn recent_quotes(quotes: &[Quote], currency: Currency) -> Vec<RecentDocument> {
        let mut recent: Vec<&Quote> = quotes.iter().collect();
        recent.sort_by(|a, b| (b.date, b.created_at).cmp(&(a.date, a.created_at)));
        recent
            .into_iter()
            .take(RECENT_LIMIT)
            .map(|quote| RecentDocument {
                number: quote.number.clone(),
                client_name: quote.client_name.clone(),
                amount: Money::new(quote.lines.totals.total, currency),
                status: quote.status.as_str().to_string(),
                date: quote.date,
            })
            .collect()
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn paid_revenue(invoices: &[&Invoice]) -> Result<Decimal, BillingError> {
    checked_sum(
        invoices
            .iter()
            .filter(|invoice| invoice.status == InvoiceStatus::Paid)
            .map(|invoice| invoice.lines.totals.total),
    )
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
