//! Core business logic for Invoicer.
//!
//! This crate contains pure business logic with ZERO web or storage dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `billing` - Line items, totals, tax policy, document numbering
//! - `client` - Client records and search
//! - `product` - Product catalog, filtering and sorting
//! - `quote` - Quotes and quote-to-invoice conversion
//! - `invoice` - Invoices and payment statuses
//! - `dashboard` - Metrics derived from the four collections

pub mod billing;
pub mod client;
pub mod dashboard;
pub mod invoice;
pub mod product;
pub mod quote;
pub mod search;
mod text;
