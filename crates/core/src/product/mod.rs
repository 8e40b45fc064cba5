//! Product and service catalog.

pub mod error;
pub mod filter;
pub mod types;

pub use error::ProductError;
pub use filter::{ProductFilter, ProductSort, categories};
pub use types::{CreateProductInput, Product, ProductUnit, UpdateProductInput};
