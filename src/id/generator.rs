use crate::item::ItemId;
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// How new item ids are produced.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IdStrategy {
    /// A random v4 UUID per item.
    #[default]
    Random,
    /// `"{namespace}-{n}"` with `n` counting up from 1.
    Sequential { namespace: String },
}

/// Produces item ids that are unique for the lifetime of the generator.
#[derive(Debug)]
pub struct IdGenerator {
    strategy: IdStrategy,
    next: AtomicU64,
}

impl IdGenerator {
    /// A generator whose counter starts at 1.
    pub fn new(strategy: IdStrategy) -> Self {
        Self {
            strategy,
            next: AtomicU64::new(1),
        }
    }

    /// Generate the next unique id.
    pub fn next_id(&self) -> ItemId {
        match &self.strategy {
            IdStrategy::Random => ItemId::new(Uuid::new_v4().to_string()),
            IdStrategy::Sequential { namespace } => {
                let n = self.next.fetch_add(1, Ordering::SeqCst);
                ItemId::new(format!("{namespace}-{n}"))
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}
