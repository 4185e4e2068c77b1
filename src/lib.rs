//! # Basket
//!
//! An in-memory grocery list with an observable store.
//!
//! The list is a sequence of named items, each of which can be marked as
//! purchased or removed. State lives in two layers:
//!
//! ## Snapshots
//!
//! - `Item` / `ItemId` - a named entry and its session-unique id
//! - `ListState` - an immutable snapshot of the items and the pending input,
//!   with pure transitions and derived counts
//!
//! ## Store
//!
//! - `ListStore` - owns the current snapshot and applies add, toggle and
//!   remove intents
//! - `Subscription` - keeps an observer registered until dropped
//! - `Selector<T>` - a cached projection that reports when it changes
//!
//! A presentation layer subscribes to the store and redraws from the latest
//! snapshot; intents that change nothing do not notify.

pub mod config;
pub mod id;
pub mod item;
pub mod state;
pub mod store;

// Re-export main types for convenience
pub use config::{ConfigError, StoreConfig};
pub use id::{IdGenerator, IdStrategy};
pub use item::{Item, ItemId, SnapshotError};
pub use state::{ListState, Summary};
pub use store::{ListStore, Selector, Subscription};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        // Basic smoke test
        let store = ListStore::new();
        assert!(store.is_empty());
        store.add_item("Milk");
        assert_eq!(store.total_count(), 1);
    }
}
