//! # itemreg-store
//!
//! Persistence backends for the itemreg item registry.
//!
//! Provides a single storage abstraction, [`ItemStore`], over a flat
//! collection of [`Item`] records: the store assigns identifiers and
//! timestamps, lookup returns insertion-order snapshots, and delete is
//! idempotent.
//!
//! ## Quick Start
//!
//! ```
//! use itemreg_store::{ItemStore, MemoryStore, NewItem};
//!
//! let mut store = MemoryStore::new();
//! let new = NewItem::new("Widget", None).unwrap();
//! let item = store.insert(&new).unwrap();
//! assert_eq!(item.name, "Widget");
//! assert_eq!(store.find_all().unwrap().len(), 1);
//! ```
//!
//! ## Backends
//!
//! | Backend | Use case |
//! |---------|----------|
//! | [`MemoryStore`] | Testing, prototyping |
//! | [`SqliteStore`] | The durable backend the service runs on |

mod item;
mod memory;
mod sqlite;
mod traits;

pub use item::{Item, ItemId, NewItem, ValidationError};
pub use memory::{MemoryError, MemoryStore};
pub use sqlite::{JournalMode, SqliteConfig, SqliteError, SqliteStore};
pub use traits::ItemStore;
