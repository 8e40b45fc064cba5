//! Document numbers (`INV-123456`, `DEV-123456`).

use chrono::{DateTime, Utc};

/// Kind of billing document, which determines the number prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// A quote (devis).
    Quote,
    /// An invoice (facture).
    Invoice,
}

/// Generates document numbers.
pub struct DocumentNumber;

impl DocumentNumber {
    /// `PREFIX-` followed by the last six digits of the millisecond timestamp.
    ///
    /// The suffix wraps every 1000 seconds, so numbers are not unique.
    #[must_use]
    pub fn generate(prefix: &str, now: DateTime<Utc>) -> String {
        let suffix = now.timestamp_millis().rem_euclid(1_000_000);
        format!("{prefix}-{suffix:06}")
    }

    /// `PREFIX-` followed by the full millisecond timestamp.
    #[must_use]
    pub fn timestamped(prefix: &str, now: DateTime<Utc>) -> String {
        format!("{prefix}-{}", now.timestamp_millis())
    }
}
