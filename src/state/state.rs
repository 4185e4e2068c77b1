use crate::item::{Item, ItemId, SnapshotError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// A complete snapshot of the grocery list.
///
/// Transitions never mutate a snapshot; they build a new one that shares
/// every untouched [`Item`] with its predecessor. A deserialized snapshot
/// is rejected if two items share an id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawListState")]
pub struct ListState {
    items: Vec<Arc<Item>>,
    pending_input: String,
}

#[derive(Deserialize)]
struct RawListState {
    items: Vec<Arc<Item>>,
    #[serde(default)]
    pending_input: String,
}

impl TryFrom<RawListState> for ListState {
    type Error = SnapshotError;

    fn try_from(raw: RawListState) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(raw.items.len());
        for item in &raw.items {
            if !seen.insert(item.id()) {
                return Err(SnapshotError::DuplicateId(item.id().clone()));
            }
        }
        Ok(Self {
            items: raw.items,
            pending_input: raw.pending_input,
        })
    }
}

impl ListState {
    /// An empty list with no pending input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Arc<Item>] {
        &self.items
    }

    /// Text typed but not yet submitted.
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Look up an item by id.
    pub fn item(&self, id: &ItemId) -> Option<&Arc<Item>> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Number of items on the list.
    pub fn total_count(&self) -> usize {
        self.items.len()
    }

    /// Number of items marked as purchased.
    pub fn purchased_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_purchased()).count()
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Counts for the footer; `None` while the list is empty.
    pub fn summary(&self) -> Option<Summary> {
        if self.is_empty() {
            return None;
        }
        Some(Summary {
            total: self.total_count(),
            purchased: self.purchased_count(),
        })
    }

    /// Append an item named after `raw_name` and clear the pending input.
    ///
    /// `None` when the trimmed name is empty.
    pub fn with_item(&self, id: ItemId, raw_name: &str) -> Option<Self> {
        let item = Item::new(id, raw_name)?;
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(Arc::new(item));
        Some(Self {
            items,
            pending_input: String::new(),
        })
    }

    /// Flip `purchased` on the item with `id`. `None` if no such item.
    pub fn with_toggled(&self, id: &ItemId) -> Option<Self> {
        let index = self.position(id)?;
        let mut items = self.items.clone();
        items[index] = Arc::new(items[index].toggled());
        Some(Self {
            items,
            pending_input: self.pending_input.clone(),
        })
    }

    /// Drop the item with `id`. `None` if no such item.
    pub fn with_removed(&self, id: &ItemId) -> Option<Self> {
        self.position(id)?;
        let items = self
            .items
            .iter()
            .filter(|item| item.id() != id)
            .cloned()
            .collect();
        Some(Self {
            items,
            pending_input: self.pending_input.clone(),
        })
    }

    /// Replace the pending input. `None` if it is unchanged.
    pub fn with_pending_input(&self, text: &str) -> Option<Self> {
        if self.pending_input == text {
            return None;
        }
        Some(Self {
            items: self.items.clone(),
            pending_input: text.to_string(),
        })
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}

/// Item counts shown beneath a non-empty list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub purchased: usize,
}

impl Summary {
    /// Items still to buy.
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.purchased)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total: {}, purchased: {}", self.total, self.purchased)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ItemId {
        ItemId::from(s)
    }

    fn milk_and_bread() -> ListState {
        ListState::new()
            .with_item(id("1"), "Milk")
            .and_then(|s| s.with_item(id("2"), "  Bread  "))
            .unwrap()
    }

    fn names(state: &ListState) -> Vec<&str> {
        state.items().iter().map(|item| item.name()).collect()
    }

    #[test]
    fn with_item_appends_and_clears_input() {
        let state = ListState::new().with_pending_input("Milk").unwrap();
        let state = state.with_item(id("1"), "Milk").unwrap();
        assert_eq!(names(&state), ["Milk"]);
        assert_eq!(state.pending_input(), "");

        let state = state.with_item(id("2"), " Eggs ").unwrap();
        assert_eq!(names(&state), ["Milk", "Eggs"]);
    }

    #[test]
    fn with_item_rejects_blank_text() {
        let state = milk_and_bread();
        assert!(state.with_item(id("3"), "").is_none());
        assert!(state.with_item(id("3"), "   ").is_none());
    }

    #[test]
    fn with_toggled_shares_untouched_items() {
        let before = milk_and_bread();
        let after = before.with_toggled(&id("2")).unwrap();

        assert!(Arc::ptr_eq(&before.items()[0], &after.items()[0]));
        assert!(!Arc::ptr_eq(&before.items()[1], &after.items()[1]));
        assert!(after.items()[1].is_purchased());
        assert!(!before.items()[1].is_purchased());
        assert_eq!(after.purchased_count(), 1);
    }

    #[test]
    fn with_toggled_unknown_id_is_none() {
        assert!(milk_and_bread().with_toggled(&id("nope")).is_none());
    }

    #[test]
    fn with_removed_keeps_order() {
        let state = milk_and_bread()
            .with_item(id("3"), "Eggs")
            .unwrap()
            .with_removed(&id("2"))
            .unwrap();
        assert_eq!(names(&state), ["Milk", "Eggs"]);
        assert!(state.with_removed(&id("2")).is_none());
    }

    #[test]
    fn transitions_keep_pending_input() {
        let state = milk_and_bread().with_pending_input("Ch").unwrap();
        let toggled = state.with_toggled(&id("1")).unwrap();
        assert_eq!(toggled.pending_input(), "Ch");
        let removed = toggled.with_removed(&id("1")).unwrap();
        assert_eq!(removed.pending_input(), "Ch");
        assert!(removed.with_pending_input("Ch").is_none());
    }

    #[test]
    fn summary_only_for_non_empty_list() {
        assert_eq!(ListState::new().summary(), None);

        let state = milk_and_bread().with_toggled(&id("1")).unwrap();
        let summary = state.summary().unwrap();
        assert_eq!(summary, Summary { total: 2, purchased: 1 });
        assert_eq!(summary.remaining(), 1);
        assert_eq!(summary.to_string(), "Total: 2, purchased: 1");
    }

    #[test]
    fn snapshot_roundtrips_through_json() {
        let state = milk_and_bread().with_toggled(&id("2")).unwrap();
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["items"][1]["name"], "Bread");
        assert_eq!(json["items"][1]["purchased"], true);
        assert_eq!(json["pending_input"], "");

        let back: ListState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn snapshot_rejects_invalid_items() {
        let blank = r#"{"items":[{"id":"a","name":"   ","purchased":false}],"pending_input":""}"#;
        let err = serde_json::from_str::<ListState>(blank).unwrap_err();
        assert!(err.to_string().contains("blank name"));

        let duplicated = r#"{"items":[
            {"id":"x","name":"Milk","purchased":false},
            {"id":"x","name":"Eggs","purchased":true}
        ]}"#;
        let err = serde_json::from_str::<ListState>(duplicated).unwrap_err();
        assert!(err.to_string().contains("appears more than once"));
    }

    #[test]
    fn summary_remaining_never_underflows() {
        let summary = Summary {
            total: 1,
            purchased: 3,
        };
        assert_eq!(summary.remaining(), 0);
    }
}
