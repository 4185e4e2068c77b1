use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Why a deserialized snapshot was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("item {0} has a blank name")]
    BlankName(ItemId),
    #[error("item id {0} appears more than once")]
    DuplicateId(ItemId),
}

/// Strip surrounding whitespace, byte order marks included.
pub(crate) fn trim_name(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Opaque identifier of an [`Item`], unique within a session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wrap an already generated identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A single entry on the grocery list.
///
/// Name and id are fixed at creation. The only mutation is flipping
/// `purchased`, which produces a new value via [`Item::toggled`].
/// Deserializing goes through the same trimming and blank check as
/// [`Item::new`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawItem")]
pub struct Item {
    id: ItemId,
    name: String,
    purchased: bool,
}

#[derive(Deserialize)]
struct RawItem {
    id: ItemId,
    name: String,
    #[serde(default)]
    purchased: bool,
}

impl TryFrom<RawItem> for Item {
    type Error = SnapshotError;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        let item = Item::new(raw.id.clone(), &raw.name)
            .ok_or(SnapshotError::BlankName(raw.id))?;
        Ok(Self {
            purchased: raw.purchased,
            ..item
        })
    }
}

impl Item {
    /// Build a new, unpurchased item from raw user text.
    ///
    /// Returns `None` when the text is empty after trimming.
    pub fn new(id: ItemId, raw_name: &str) -> Option<Self> {
        let name = trim_name(raw_name);
        if name.is_empty() {
            return None;
        }
        Some(Self {
            id,
            name: name.to_string(),
            purchased: false,
        })
    }

    /// The item's session-unique id.
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// The trimmed display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the item has been marked as purchased.
    pub fn is_purchased(&self) -> bool {
        self.purchased
    }

    /// A copy of this item with `purchased` negated.
    pub fn toggled(&self) -> Self {
        Self {
            purchased: !self.purchased,
            ..self.clone()
        }
    }
}
