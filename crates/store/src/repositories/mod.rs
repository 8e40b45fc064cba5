//! Repositories over the in-memory collections.
//!
//! Every repository follows the same pattern: `create` prepends, `update`
//! merges supplied fields, `delete` removes one record, `get` looks up by id
//! and `list` returns records newest first.

pub mod client;
pub mod invoice;
pub mod product;
pub mod quote;

pub use client::ClientRepository;
pub use invoice::InvoiceRepository;
pub use product::ProductRepository;
pub use quote::QuoteRepository;
