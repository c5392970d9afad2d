use std::fmt;

use crate::item::{Item, ItemId, NewItem};

/// Core trait for item persistence.
///
/// Every backend implements this trait. The store owns identity assignment
/// and timestamp bookkeeping: callers hand over a validated [`NewItem`] and
/// get back the stored record with its assigned id.
///
/// Contract:
/// - `insert` assigns a fresh identifier and both timestamps; identifiers
///   are never reused, even after a delete.
/// - `find_all` returns a snapshot in insertion order; an empty store yields
///   an empty vec, never an error.
/// - `delete` is idempotent — deleting an absent id succeeds without
///   touching any other record.
pub trait ItemStore {
    /// Error type for this backend.
    type Error: fmt::Debug + fmt::Display;

    /// Persist a new item, assigning its identifier and timestamps.
    fn insert(&mut self, new: &NewItem) -> Result<Item, Self::Error>;

    /// Snapshot of all items in insertion order.
    fn find_all(&self) -> Result<Vec<Item>, Self::Error>;

    /// Look up a single item. Returns `None` if the id does not exist.
    fn find(&self, id: ItemId) -> Result<Option<Item>, Self::Error>;

    /// Remove an item by id. A no-op for absent ids.
    fn delete(&mut self, id: ItemId) -> Result<(), Self::Error>;

    /// Number of live items.
    fn count(&self) -> Result<u64, Self::Error> {
        Ok(self.find_all()?.len() as u64)
    }
}
