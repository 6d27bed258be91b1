//! The cart entry type and its persisted record layout.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::format::{format_timestamp, title_case};

/// Number of hex characters in a generated item id.
pub const ITEM_ID_LEN: usize = 16;

/// One entry in the shopping cart.
///
/// Items are never edited after creation. The serialized field names match
/// the records the cart has always been stored with (`itemName`, `time`,
/// `formattedTime`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Unique key used for lookup and deletion.
    pub id: String,
    /// Title-cased display name.
    #[serde(rename = "itemName")]
    pub item_name: String,
    /// Requested count, never zero at rest.
    pub quantity: i64,
    /// Creation time in epoch milliseconds.
    #[serde(rename = "time", alias = "createdAtEpochMs")]
    pub created_at_epoch_ms: i64,
    /// Display form of `created_at_epoch_ms`, captured once at creation.
    #[serde(rename = "formattedTime")]
    pub formatted_created_at: String,
}

impl CartItem {
    /// Builds an item, normalizing the name and snapshotting the display time.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier, expected unique within the cart
    /// * `item_name` - Raw name as typed; trimmed and title-cased here
    /// * `quantity` - Item count
    /// * `created_at_epoch_ms` - Creation time in epoch milliseconds
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        item_name: &str,
        quantity: i64,
        created_at_epoch_ms: i64,
    ) -> Self {
        Self {
            id: id.into(),
            item_name: title_case(item_name.trim()),
            quantity,
            created_at_epoch_ms,
            formatted_created_at: format_timestamp(created_at_epoch_ms),
        }
    }

    /// Generates a fresh item id that `is_taken` does not reject.
    pub fn generate_id(is_taken: impl Fn(&str) -> bool) -> String {
        loop {
            let mut id = Uuid::new_v4().simple().to_string();
            id.truncate(ITEM_ID_LEN);
            if !is_taken(&id) {
                return id;
            }
        }
    }

    /// Returns `true` if the item satisfies the at-rest cart rules.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.item_name.trim().is_empty() && self.quantity != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use std::collections::HashSet;

    #[test]
    fn test_new_normalizes_name() {
        let item = CartItem::new("abc", "  milk and eggs ", 3, 0);
        assert_eq!(item.item_name, "Milk And Eggs");
        assert_eq!(item.quantity, 3);
        assert_eq!(item.formatted_created_at, format_timestamp(0));
    }

    #[test]
    fn test_serialized_field_names() {
        let item = CartItem {
            id: "0123456789abcdef".to_string(),
            item_name: "Bread".to_string(),
            quantity: 2,
            created_at_epoch_ms: 1_760_627_045_000,
            formatted_created_at: "16/10/2025, 3:04:05 PM".to_string(),
        };

        assert_snapshot!(
            serde_json::to_string(&item).unwrap(),
            @r#"{"id":"0123456789abcdef","itemName":"Bread","quantity":2,"time":1760627045000,"formattedTime":"16/10/2025, 3:04:05 PM"}"#
        );
    }

    #[test]
    fn test_deserialize_accepts_created_at_alias() {
        let json = r#"{"id":"a1","itemName":"Milk","quantity":5,"createdAtEpochMs":42,"formattedTime":"x"}"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.created_at_epoch_ms, 42);
    }

    #[test]
    fn test_generate_id_shape_and_uniqueness() {
        let mut seen = HashSet::new();
        for _ in 0..500 {
            let id = CartItem::generate_id(|candidate| seen.contains(candidate));
            assert_eq!(id.len(), ITEM_ID_LEN);
            assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
            assert!(seen.insert(id));
        }
    }

    #[test]
    fn test_generate_id_retries_taken_ids() {
        let calls = std::cell::Cell::new(0);
        let id = CartItem::generate_id(|_| {
            calls.set(calls.get() + 1);
            calls.get() < 3
        });
        assert_eq!(calls.get(), 3);
        assert_eq!(id.len(), ITEM_ID_LEN);
    }

    #[test]
    fn test_is_valid() {
        assert!(CartItem::new("a", "Milk", 1, 0).is_valid());
        assert!(CartItem::new("a", "Milk", -1, 0).is_valid());
        assert!(!CartItem::new("a", "Milk", 0, 0).is_valid());
        assert!(!CartItem::new("a", "   ", 1, 0).is_valid());
        assert!(!CartItem::new("", "Milk", 1, 0).is_valid());
    }
}
