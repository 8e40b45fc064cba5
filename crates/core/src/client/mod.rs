//! Client records, validation and search.

pub mod error;
pub mod stats;
pub mod types;

pub use error::ClientError;
pub use stats::ClientStats;
pub use types::{Client, ClientFilter, CreateClientInput, UpdateClientInput};
