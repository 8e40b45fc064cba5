//! Generic in-memory collection shared by the repositories.

use std::fmt::Display;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::StoreError;

/// A record stored in a [`Collection`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Typed id of the record.
    type Id: Copy + Eq + Display + Send + Sync;

    /// Record kind used in error messages and logs.
    const KIND: &'static str;

    /// The record's id.
    fn id(&self) -> Self::Id;
}

/// An ordered list of records, newest first, behind a `RwLock`.
///
/// Each operation holds the lock only for its own read or mutation.
#[derive(Debug)]
pub struct Collection<R> {
    records: Arc<RwLock<Vec<R>>>,
}

impl<R> Clone for Collection<R> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<R> Default for Collection<R> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<R: Record> Collection<R> {
    /// Creates a collection holding `records` in the given order.
    #[must_use]
    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Inserts a record at the front.
    pub async fn prepend(&self, record: R) -> R {
        self.records.write().await.insert(0, record.clone());
        record
    }

    /// Applies `mutate` to the record with `id` and returns the result.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id, or the error produced by `mutate`.
    pub async fn modify<E>(
        &self,
        id: R::Id,
        mutate: impl FnOnce(&mut R) -> Result<(), E>,
    ) -> Result<R, StoreError>
    where
        StoreError: From<E>,
    {
        let mut records = self.records.write().await;
        let record = records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| StoreError::not_found(R::KIND, id))?;
        mutate(record)?;
        Ok(record.clone())
    }

    /// Removes the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id.
    pub async fn remove(&self, id: R::Id) -> Result<R, StoreError> {
        let mut records = self.records.write().await;
        let index = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| StoreError::not_found(R::KIND, id))?;
        Ok(records.remove(index))
    }

    /// Looks up a record by id.
    pub async fn get(&self, id: R::Id) -> Option<R> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    /// Records passing `keep`, in collection order.
    pub async fn filter(&self, keep: impl Fn(&R) -> bool) -> Vec<R> {
        self.records
            .read()
            .await
            .iter()
            .filter(|record| keep(record))
            .cloned()
            .collect()
    }

    /// Snapshot of every record.
    pub async fn all(&self) -> Vec<R> {
        self.records.read().await.clone()
    }

    /// Number of records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// True if the collection is empty.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Note {
        id: u32,
        text: &'static str,
    }

    impl Record for Note {
        type Id = u32;
        const KIND: &'static str = "note";

        fn id(&self) -> u32 {
            self.id
        }
    }

    fn note(id: u32, text: &'static str) -> Note {
        Note { id, text }
    }

    #[tokio::test]
    async fn test_prepend_keeps_newest_first() {
        let collection = Collection::default();
        collection.prepend(note(1, "first")).await;
        collection.prepend(note(2, "second")).await;

        let ids: Vec<u32> = collection.all().await.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[tokio::test]
    async fn test_modify_and_remove_unknown_id() {
        let collection = Collection::with_records(vec![note(1, "first")]);

        let result = collection
            .modify(7, |n| {
                n.text = "changed";
                Ok::<(), StoreError>(())
            })
            .await;
        assert_eq!(result, Err(StoreError::not_found("note", 7)));
        assert_eq!(collection.remove(7).await, Err(StoreError::not_found("note", 7)));
        assert_eq!(collection.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove_exactly_one() {
        let collection =
            Collection::with_records(vec![note(3, "c"), note(2, "b"), note(1, "a")]);

        let removed = collection.remove(2).await.unwrap();

        assert_eq!(removed, note(2, "b"));
        assert_eq!(collection.all().await, vec![note(3, "c"), note(1, "a")]);
        assert!(collection.get(2).await.is_none());
    }

    #[tokio::test]
    async fn test_failed_mutation_is_reported() {
        let collection = Collection::with_records(vec![note(1, "a")]);

        let result = collection
            .modify(1, |_| Err(StoreError::not_found("reason", "x")))
            .await;

        assert!(result.is_err());
        assert_eq!(collection.get(1).await, Some(note(1, "a")));
    }
}
