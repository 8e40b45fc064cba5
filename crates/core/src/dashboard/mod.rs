//! Dashboard metrics computed from the collections.
//!
//! This module provides:
//! - Monthly invoice count and paid revenue
//! - Recent quote and invoice activity
//! - Invoice counts per status

pub mod service;
pub mod types;

pub use service::{DashboardService, RECENT_LIMIT};
pub use types::{DashboardMetrics, RecentDocument, StatusCount};
