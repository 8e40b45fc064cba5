//! Shared types, errors, and configuration for Invoicer.
//!
//! This crate provides common types used across all other crates:
//! - Money types with decimal precision
//! - Typed IDs for type-safe record references
//! - Pagination types for list endpoints
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, BillingConfig, ServerConfig, StoreConfig};
pub use error::AppError;
