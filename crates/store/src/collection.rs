//! Generic whole-collection read-modify-write over one store key.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::{RecordStore, RecordStoreExt, StorageError};

/// A record type that lives in its own collection document.
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Typed identifier for this entity.
    type Id: PartialEq;

    /// Namespaced key the collection document is stored under.
    const STORAGE_KEY: &'static str;

    /// The record's identifier.
    fn id(&self) -> &Self::Id;
}

/// An ordered collection of records mirrored to one record-store key.
///
/// Hydrated once at construction: the stored document if the key is present,
/// else the seed list. The seed is not written back until the first mutation.
/// Every mutation rewrites the whole document and hands back the new
/// snapshot. Updating or removing an absent id is a silent no-op, which makes
/// `remove` idempotent.
pub struct Collection<T: Entity> {
    store: Arc<dyn RecordStore>,
    records: Vec<T>,
}

impl<T: Entity> std::fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection")
            .field("key", &T::STORAGE_KEY)
            .field("len", &self.records.len())
            .finish_non_exhaustive()
    }
}

impl<T: Entity> Collection<T> {
    /// Hydrate the collection from the store, falling back to `seed` when the
    /// key is absent.
    ///
    /// # Errors
    ///
    /// Returns a read error, or [`StorageError::Corrupt`] if the stored
    /// document does not match the record shape.
    pub fn hydrate(
        store: Arc<dyn RecordStore>,
        seed: impl FnOnce() -> Vec<T>,
    ) -> Result<Self, StorageError> {
        let (records, seeded) = match store.get_json::<Vec<T>>(T::STORAGE_KEY)? {
            Some(records) => (records, false),
            None => (seed(), true),
        };
        tracing::debug!(
            key = T::STORAGE_KEY,
            count = records.len(),
            seeded,
            "hydrated collection"
        );
        Ok(Self { store, records })
    }

    /// The current snapshot, in insertion order.
    #[must_use]
    pub fn list(&self) -> &[T] {
        &self.records
    }

    /// Look up a record by id.
    #[must_use]
    pub fn find(&self, id: &T::Id) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Append a record and persist.
    ///
    /// # Errors
    ///
    /// Returns a write error from the record store.
    pub fn insert(&mut self, record: T) -> Result<&[T], StorageError> {
        self.records.push(record);
        self.persist()?;
        Ok(&self.records)
    }

    /// Apply `apply` to the record matching `id`, then persist.
    ///
    /// An absent id leaves every record untouched; the document is still
    /// rewritten, matching the original read-modify-write contract.
    ///
    /// # Errors
    ///
    /// Returns a write error from the record store.
    pub fn update_with(
        &mut self,
        id: &T::Id,
        apply: impl FnOnce(&mut T),
    ) -> Result<&[T], StorageError> {
        if let Some(record) = self.records.iter_mut().find(|r| r.id() == id) {
            apply(record);
        }
        self.persist()?;
        Ok(&self.records)
    }

    /// Remove the record matching `id`, if present, then persist.
    ///
    /// # Errors
    ///
    /// Returns a write error from the record store.
    pub fn remove(&mut self, id: &T::Id) -> Result<&[T], StorageError> {
        self.records.retain(|r| r.id() != id);
        self.persist()?;
        Ok(&self.records)
    }

    /// Replace the whole collection, then persist. Used by bulk operations
    /// such as banner reordering.
    ///
    /// # Errors
    ///
    /// Returns a write error from the record store.
    pub fn replace_all(&mut self, records: Vec<T>) -> Result<&[T], StorageError> {
        self.records = records;
        self.persist()?;
        Ok(&self.records)
    }

    fn persist(&self) -> Result<(), StorageError> {
        self.store.set_json(T::STORAGE_KEY, &self.records)
    }
}
