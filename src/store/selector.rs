use super::list_store::ListStore;
use super::subscription::Subscription;
use super::{read_lock, write_lock};
use crate::state::ListState;
use std::sync::{Arc, RwLock};

struct Selected<T> {
    value: T,
    changed: bool,
    version: u64,
}

impl<T: PartialEq> Selected<T> {
    // Snapshots can arrive out of order; only a newer version counts.
    fn refresh(&mut self, value: T, version: u64) {
        if version <= self.version {
            return;
        }
        self.version = version;
        if self.value != value {
            self.value = value;
            self.changed = true;
        }
    }
}

/// A cached projection of a store's state.
///
/// The projection is recomputed on every store update; the cached value is
/// only replaced, and flagged as changed, when the result differs. A view
/// can poll [`Selector::take_changed`] to decide whether it needs redrawing.
/// Updates older than the cached value are ignored, so the selector settles
/// on the store's latest state even when intents race.
///
/// # Examples
///
/// ```
/// use basket::ListStore;
///
/// let store = ListStore::new();
/// let purchased = store.select(|state| state.purchased_count());
///
/// store.add_item("Milk");
/// assert!(!purchased.take_changed());
///
/// let milk = store.items()[0].id().clone();
/// store.toggle_purchased(&milk);
/// assert!(purchased.take_changed());
/// assert_eq!(purchased.get(), 1);
/// ```
pub struct Selector<T> {
    selected: Arc<RwLock<Selected<T>>>,
    _subscription: Subscription,
}

impl<T: Clone + PartialEq + Send + Sync + 'static> Selector<T> {
    pub(crate) fn new<F>(store: &ListStore, projection: F) -> Self
    where
        F: Fn(&ListState) -> T + Send + Sync + 'static,
    {
        let projection = Arc::new(projection);
        let (value, version) = store.read_versioned(&*projection);
        let selected = Arc::new(RwLock::new(Selected {
            value,
            changed: false,
            version,
        }));

        let subscription = store.subscribe_versioned({
            let selected = Arc::clone(&selected);
            let projection = Arc::clone(&projection);
            move |state, version| {
                write_lock(&selected).refresh((*projection)(state), version);
            }
        });

        // Catch a change that landed before the subscription existed.
        let (value, version) = store.read_versioned(&*projection);
        write_lock(&selected).refresh(value, version);

        Self {
            selected,
            _subscription: subscription,
        }
    }

    /// Get the current projected value.
    pub fn get(&self) -> T {
        read_lock(&self.selected).value.clone()
    }

    /// Read the projected value with a function without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&read_lock(&self.selected).value)
    }

    /// Whether the value changed since the last call, clearing the flag.
    pub fn take_changed(&self) -> bool {
        std::mem::take(&mut write_lock(&self.selected).changed)
    }
}
