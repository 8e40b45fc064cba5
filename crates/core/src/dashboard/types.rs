//! Dashboard data types.

use chrono::NaiveDate;
use invoicer_shared::types::Money;
use serde::Serialize;

use crate::invoice::InvoiceStatus;

/// Dashboard metrics response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    /// First day of the current month.
    pub month: NaiveDate,
    /// Invoices dated this month.
    pub invoices_this_month: u32,
    /// Invoices dated last month.
    pub invoices_last_month: u32,
    /// Paid invoice totals dated this month.
    pub revenue_this_month: Money,
    /// Paid invoice totals dated last month.
    pub revenue_last_month: Money,
    /// Number of clients.
    pub client_count: u32,
    /// Number of products.
    pub product_count: u32,
    /// Most recent invoices.
    pub recent_invoices: Vec<RecentDocument>,
    /// Most recent quotes.
    pub recent_quotes: Vec<RecentDocument>,
    /// Invoice count per status, every status listed.
    pub invoices_by_status: Vec<StatusCount>,
}

/// One row of a recent-documents list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentDocument {
    /// Document number.
    pub number: String,
    /// Client name.
    pub client_name: String,
    /// Document total.
    pub amount: Money,
    /// Status, as serialized on the document.
    pub status: String,
    /// Document date.
    pub date: NaiveDate,
}

/// Number of invoices in one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    /// Status.
    pub status: InvoiceStatus,
    /// Invoice count.
    pub count: u32,
}
