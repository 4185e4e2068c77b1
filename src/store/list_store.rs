use super::selector::Selector;
use super::subscription::{Subscribers, Subscription};
use super::{read_lock, write_lock};
use crate::config::{ConfigError, StoreConfig};
use crate::id::IdGenerator;
use crate::item::{trim_name, Item, ItemId};
use crate::state::{ListState, Summary};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tracing::{debug, trace};

/// A thread-safe store owning one grocery list.
///
/// Every intent (`add_item`, `toggle_purchased`, `remove_item`) replaces the
/// current [`ListState`] with a new snapshot and returns it. Subscribers are
/// told about each new snapshot; intents that change nothing are silent.
///
/// Each change bumps the store's [version](ListStore::version). Subscribers
/// run after the state lock is released, so when intents race on several
/// threads their notifications may arrive out of order; [`Selector`]s use
/// the version to discard stale snapshots.
///
/// Cloning a `ListStore` yields another handle onto the same list.
///
/// # Examples
///
/// ```
/// use basket::ListStore;
///
/// let store = ListStore::new();
/// store.add_item("Milk");
/// let state = store.add_item("  Bread  ");
///
/// assert_eq!(state.total_count(), 2);
/// assert_eq!(state.items()[1].name(), "Bread");
///
/// let bread = state.items()[1].id().clone();
/// let state = store.toggle_purchased(&bread);
/// assert_eq!(state.purchased_count(), 1);
/// ```
pub struct ListStore {
    state: Arc<RwLock<ListState>>,
    version: Arc<AtomicU64>,
    subscribers: Arc<RwLock<Subscribers>>,
    ids: Arc<IdGenerator>,
}

impl ListStore {
    /// Create an empty store with random item ids.
    pub fn new() -> Self {
        Self::with_ids(IdGenerator::default())
    }

    /// Create an empty store from a config.
    pub fn with_config(config: StoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_ids(IdGenerator::new(config.id_strategy)))
    }

    fn with_ids(ids: IdGenerator) -> Self {
        Self {
            state: Arc::new(RwLock::new(ListState::new())),
            version: Arc::new(AtomicU64::new(0)),
            subscribers: Arc::new(RwLock::new(Subscribers::default())),
            ids: Arc::new(ids),
        }
    }

    /// Get a clone of the current snapshot.
    pub fn state(&self) -> ListState {
        read_lock(&self.state).clone()
    }

    /// Read the current snapshot without cloning it.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ListState) -> R,
    {
        let state = read_lock(&self.state);
        f(&*state)
    }

    /// Read the current snapshot together with its version.
    pub(crate) fn read_versioned<F, R>(&self, f: F) -> (R, u64)
    where
        F: FnOnce(&ListState) -> R,
    {
        let state = read_lock(&self.state);
        (f(&*state), self.version.load(Ordering::SeqCst))
    }

    /// Number of changes applied so far. Starts at 0.
    pub fn version(&self) -> u64 {
        self.read_versioned(|_| ()).1
    }

    /// Clones of the current items, in order.
    pub fn items(&self) -> Vec<Arc<Item>> {
        self.read(|state| state.items().to_vec())
    }

    /// Look up an item by id.
    pub fn item(&self, id: &ItemId) -> Option<Arc<Item>> {
        self.read(|state| state.item(id).cloned())
    }

    /// Number of items on the list.
    pub fn total_count(&self) -> usize {
        self.read(ListState::total_count)
    }

    /// Number of items marked as purchased.
    pub fn purchased_count(&self) -> usize {
        self.read(ListState::purchased_count)
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.read(ListState::is_empty)
    }

    /// Footer counts, `None` while the list is empty.
    pub fn summary(&self) -> Option<Summary> {
        self.read(ListState::summary)
    }

    /// Text typed but not yet submitted.
    pub fn pending_input(&self) -> String {
        self.read(|state| state.pending_input().to_string())
    }

    /// Add an item named `raw_text`, trimmed. Blank text is ignored.
    pub fn add_item(&self, raw_text: &str) -> ListState {
        if trim_name(raw_text).is_empty() {
            trace!("ignoring blank item text");
            return self.state();
        }
        let id = self.ids.next_id();
        self.apply("add_item", |state| state.with_item(id, raw_text))
    }

    /// Flip the purchased flag of the item with `id`, if present.
    pub fn toggle_purchased(&self, id: &ItemId) -> ListState {
        self.apply("toggle_purchased", |state| state.with_toggled(id))
    }

    /// Remove the item with `id`, if present.
    pub fn remove_item(&self, id: &ItemId) -> ListState {
        self.apply("remove_item", |state| state.with_removed(id))
    }

    /// Record what the user has typed but not yet submitted.
    pub fn set_pending_input(&self, text: &str) -> ListState {
        self.apply("set_pending_input", |state| state.with_pending_input(text))
    }

    /// Submit the pending input as a new item.
    ///
    /// Blank input adds nothing and is left in place.
    pub fn submit_pending(&self) -> ListState {
        let text = self.pending_input();
        self.add_item(&text)
    }

    /// Subscribe to state changes.
    ///
    /// The callback runs with the new snapshot after every intent that
    /// changed the list. It may call back into the store.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ListState) + Send + Sync + 'static,
    {
        self.subscribe_versioned(move |state, _version| callback(state))
    }

    pub(crate) fn subscribe_versioned<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&ListState, u64) + Send + Sync + 'static,
    {
        let id = write_lock(&self.subscribers).insert(Arc::new(callback));
        Subscription::new(id, &self.subscribers)
    }

    /// Number of live subscriptions, selectors included.
    pub fn subscriber_count(&self) -> usize {
        read_lock(&self.subscribers).len()
    }

    /// Create a cached projection of the state that tracks changes.
    pub fn select<T, F>(&self, projection: F) -> Selector<T>
    where
        T: Clone + PartialEq + Send + Sync + 'static,
        F: Fn(&ListState) -> T + Send + Sync + 'static,
    {
        Selector::new(self, projection)
    }

    fn apply<F>(&self, intent: &'static str, transition: F) -> ListState
    where
        F: FnOnce(&ListState) -> Option<ListState>,
    {
        let (next, version) = {
            let mut state = write_lock(&self.state);
            match transition(&*state) {
                Some(next) => {
                    *state = next.clone();
                    (next, self.version.fetch_add(1, Ordering::SeqCst) + 1)
                }
                None => {
                    trace!(intent, "no change");
                    return state.clone();
                }
            }
        };
        debug!(
            intent,
            version,
            total = next.total_count(),
            purchased = next.purchased_count(),
            "list updated"
        );
        self.notify(&next, version);
        next
    }

    /// Notify all subscribers of a state change.
    fn notify(&self, state: &ListState, version: u64) {
        let subscribers = read_lock(&self.subscribers).snapshot();
        for subscriber in subscribers {
            subscriber(state, version);
        }
    }
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ListStore {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            version: Arc::clone(&self.version),
            subscribers: Arc::clone(&self.subscribers),
            ids: Arc::clone(&self.ids),
        }
    }
}
