use super::write_lock;
use crate::state::ListState;
use std::sync::{Arc, RwLock, Weak};

// Called with each new snapshot and its version.
pub(crate) type Subscriber = Arc<dyn Fn(&ListState, u64) + Send + Sync>;

/// Registered observers of a store, keyed by registration order.
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: usize,
    entries: Vec<(usize, Subscriber)>,
}

impl Subscribers {
    pub(crate) fn insert(&mut self, subscriber: Subscriber) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((id, subscriber));
        id
    }

    pub(crate) fn remove(&mut self, id: usize) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    pub(crate) fn snapshot(&self) -> Vec<Subscriber> {
        self.entries.iter().map(|(_, s)| Arc::clone(s)).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// RAII guard for a store subscriber.
///
/// The subscriber is unregistered when the guard is dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: usize,
    registry: Weak<RwLock<Subscribers>>,
}

impl Subscription {
    pub(crate) fn new(id: usize, registry: &Arc<RwLock<Subscribers>>) -> Self {
        Self {
            id,
            registry: Arc::downgrade(registry),
        }
    }

    /// Keep the subscriber registered for as long as the store lives.
    pub fn detach(mut self) {
        self.registry = Weak::new();
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            write_lock(&registry).remove(self.id);
        }
    }
}
