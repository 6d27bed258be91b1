//! The cart store: ordered items plus their durable mirror.
//!
//! Every mutation is an in-memory transition followed by a write of the full
//! snapshot to storage. Writes made on behalf of `add`/`remove` are
//! best-effort: a failing backend is logged and the in-memory cart stays
//! authoritative for the rest of the session.

use std::collections::HashSet;

use chrono::Utc;

use super::{CartError, CartItem};
use crate::storage::Storage;

/// Storage key holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "cart";

/// Owns the ordered cart and persists it on every change.
#[derive(Debug)]
pub struct CartStore {
    items: Vec<CartItem>,
    storage: Box<dyn Storage>,
}

impl CartStore {
    /// Restores the cart from `storage`.
    ///
    /// A missing key yields an empty cart. Unreadable or malformed content
    /// also yields an empty cart; records that decode but break the cart
    /// rules (empty name, zero quantity, repeated id) are skipped.
    #[must_use]
    pub fn initialize(storage: Box<dyn Storage>) -> Self {
        let items = match storage.get(CART_STORAGE_KEY) {
            Ok(Some(raw)) => Self::decode(&raw),
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!("Cart storage unreadable, starting empty: {err}");
                Vec::new()
            }
        };

        tracing::debug!(count = items.len(), "cart initialized");
        Self { items, storage }
    }

    fn decode(raw: &str) -> Vec<CartItem> {
        let records: Vec<CartItem> = match serde_json::from_str(raw) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!("Stored cart is malformed, starting empty: {err}");
                return Vec::new();
            }
        };

        let mut seen = HashSet::new();
        records
            .into_iter()
            .filter(|item| {
                let keep = item.is_valid() && seen.insert(item.id.clone());
                if !keep {
                    tracing::warn!(id = %item.id, "Dropping invalid stored cart item");
                }
                keep
            })
            .collect()
    }

    /// Appends a new item and persists the cart.
    ///
    /// Callers are expected to validate input first; invalid input is still
    /// rejected here and leaves the cart untouched.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyName`] or [`CartError::ZeroQuantity`].
    ///
    /// # Returns
    ///
    /// A copy of the created item, for confirmation messages.
    pub fn add(&mut self, item_name: &str, quantity: i64) -> Result<CartItem, CartError> {
        self.add_at(item_name, quantity, Utc::now().timestamp_millis())
    }

    /// Same as [`add`](Self::add) with an explicit creation time.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyName`] or [`CartError::ZeroQuantity`].
    pub fn add_at(
        &mut self,
        item_name: &str,
        quantity: i64,
        created_at_epoch_ms: i64,
    ) -> Result<CartItem, CartError> {
        if item_name.trim().is_empty() {
            return Err(CartError::EmptyName);
        }
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        let id = CartItem::generate_id(|candidate| self.contains(candidate));
        let item = CartItem::new(id, item_name, quantity, created_at_epoch_ms);

        self.items.push(item.clone());
        tracing::debug!(id = %item.id, name = %item.item_name, quantity, "cart item added");
        self.persist_best_effort();

        Ok(item)
    }

    /// Removes the item with `id` and persists the cart.
    ///
    /// Returns the removed item, or `None` when no item has that id (in which
    /// case nothing changes and nothing is written).
    pub fn remove(&mut self, id: &str) -> Option<CartItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(index);

        tracing::debug!(id = %removed.id, name = %removed.item_name, "cart item removed");
        self.persist_best_effort();

        Some(removed)
    }

    /// Writes the full cart snapshot to storage, replacing prior content.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub fn persist(&mut self) -> Result<(), CartError> {
        let encoded = serde_json::to_string(&self.items)?;
        self.storage.set(CART_STORAGE_KEY, &encoded)?;
        Ok(())
    }

    fn persist_best_effort(&mut self) {
        if let Err(err) = self.persist() {
            tracing::warn!("Failed to persist cart: {err}");
        }
    }

    /// Number of items in the cart.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|item| item.id == id)
    }
}

// ============================================================================
// Tests
// ============================================================================
