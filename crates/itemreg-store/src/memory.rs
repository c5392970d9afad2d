use std::collections::BTreeMap;
use std::fmt;

use crate::item::{Item, ItemId, NewItem};
use crate::traits::ItemStore;

/// In-memory storage backend.
///
/// All data lives in a `BTreeMap` — nothing touches disk. Ideal for tests
/// and prototyping; the service accepts it anywhere it accepts the SQLite
/// backend.
///
/// # Example
///
/// ```
/// use itemreg_store::{ItemStore, MemoryStore, NewItem};
///
/// let mut store = MemoryStore::new();
/// let item = store.insert(&NewItem::new("Widget", None).unwrap()).unwrap();
/// assert_eq!(store.find(item.id).unwrap().unwrap().name, "Widget");
/// ```
pub struct MemoryStore {
    /// id -> item; BTreeMap iteration order is id order, which is
    /// insertion order because ids are monotone.
    items: BTreeMap<ItemId, Item>,
    /// Next id to assign. Never decremented, so deleted ids stay retired.
    next_id: ItemId,
}

/// Error type for the in-memory backend.
///
/// This backend never actually fails, but the trait requires an error type.
#[derive(Debug, Clone)]
pub struct MemoryError(String);

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MemoryStore error: {}", self.0)
    }
}

impl std::error::Error for MemoryError {}

impl MemoryStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn now_ms() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for MemoryStore {
    type Error = MemoryError;

    fn insert(&mut self, new: &NewItem) -> Result<Item, Self::Error> {
        let id = self.next_id;
        self.next_id += 1;

        let now = Self::now_ms();
        let item = Item {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
            created_at: now,
            updated_at: now,
        };
        self.items.insert(id, item.clone());
        Ok(item)
    }

    fn find_all(&self) -> Result<Vec<Item>, Self::Error> {
        Ok(self.items.values().cloned().collect())
    }

    fn find(&self, id: ItemId) -> Result<Option<Item>, Self::Error> {
        Ok(self.items.get(&id).cloned())
    }

    fn delete(&mut self, id: ItemId) -> Result<(), Self::Error> {
        self.items.remove(&id);
        Ok(())
    }

    fn count(&self) -> Result<u64, Self::Error> {
        Ok(self.items.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new(name: &str, description: Option<&str>) -> NewItem {
        NewItem::new(name, description.map(str::to_string)).unwrap()
    }

    #[test]
    fn insert_assigns_id_and_timestamps() {
        let mut store = MemoryStore::new();
        let item = store.insert(&new("Widget", Some("blue"))).unwrap();

        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Widget");
        assert_eq!(item.description.as_deref(), Some("blue"));
        assert!(item.created_at > 0);
        assert_eq!(item.created_at, item.updated_at);
    }

    #[test]
    fn find_all_empty_store() {
        let store = MemoryStore::new();
        assert_eq!(store.find_all().unwrap(), vec![]);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn find_all_insertion_order() {
        let mut store = MemoryStore::new();
        store.insert(&new("first", None)).unwrap();
        store.insert(&new("second", None)).unwrap();
        store.insert(&new("third", None)).unwrap();

        let names: Vec<_> = store
            .find_all()
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn delete_removes_only_target() {
        let mut store = MemoryStore::new();
        let a = store.insert(&new("a", None)).unwrap();
        let b = store.insert(&new("b", None)).unwrap();

        store.delete(a.id).unwrap();
        assert!(store.find(a.id).unwrap().is_none());
        assert!(store.find(b.id).unwrap().is_some());
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn delete_absent_id_is_noop() {
        let mut store = MemoryStore::new();
        store.insert(&new("a", None)).unwrap();

        store.delete(999).unwrap();
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = MemoryStore::new();
        let a = store.insert(&new("a", None)).unwrap();
        store.delete(a.id).unwrap();

        let b = store.insert(&new("b", None)).unwrap();
        assert!(b.id > a.id);
    }

    #[test]
    fn concurrent_style_inserts_get_distinct_ids() {
        let mut store = MemoryStore::new();
        let a = store.insert(&new("a", None)).unwrap();
        let b = store.insert(&new("a", None)).unwrap();
        assert_ne!(a.id, b.id);
    }
}
