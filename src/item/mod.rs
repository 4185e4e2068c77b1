//! List entries and their identifiers.

mod item;

pub(crate) use item::trim_name;
pub use item::{Item, ItemId, SnapshotError};
