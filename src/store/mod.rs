//! The grocery list store and its observer surface.
//!
//! A [`ListStore`] owns the current [`ListState`](crate::ListState), applies
//! intents to it and hands every new snapshot to its subscribers. A
//! [`Selector`] narrows that stream to a single derived value.

mod list_store;
mod selector;
mod subscription;

pub use list_store::ListStore;
pub use selector::Selector;
pub use subscription::Subscription;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// Snapshots are replaced whole, never edited in place, so a poisoned lock
// still guards a complete value.
fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
